// src/net.rs
//
// Single-shot HTTP GET. No custom headers, no retry, default timeouts.

use crate::error::Error;

pub fn http_get(url: &str) -> Result<String, Error> {
    let resp = reqwest::blocking::get(url)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(resp.text()?)
}
