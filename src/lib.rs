// src/lib.rs

pub mod config;
pub mod error;
pub mod matcher;
pub mod net;
pub mod notify;
pub mod runner;
pub mod sanitize;
pub mod server;

pub use error::Error;
