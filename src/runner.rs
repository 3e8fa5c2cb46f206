// src/runner.rs
//
// Shared pipeline: fetch -> match -> notify. Both entry points call this;
// they differ only in how they report the outcome.

use chrono::Local;

use crate::config::{Config, KEYWORDS};
use crate::error::Error;
use crate::matcher::{self, Matches};
use crate::net;
use crate::notify::{self, NotifyOutcome};

/// Summary of one run.
pub struct RunReport {
    pub matches: Matches,
    /// None when there were no matches and nothing was rendered or sent.
    pub outcome: Option<NotifyOutcome>,
}

pub fn run(config: &Config, dry_run: bool) -> Result<RunReport, Error> {
    let html = net::http_get(&config.event_url)?;

    let today = Local::now().date_naive();
    let matches = matcher::find_matching_events(&html, &KEYWORDS, today);
    if matches.skipped_bad_dates > 0 {
        tracing::debug!(
            "skipped {} row(s) with unparseable date cells",
            matches.skipped_bad_dates
        );
    }

    if matches.is_empty() {
        return Ok(RunReport {
            matches,
            outcome: None,
        });
    }

    let outcome = notify::send_email(config, &matches.rows, dry_run)?;
    Ok(RunReport {
        matches,
        outcome: Some(outcome),
    })
}
