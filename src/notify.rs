// src/notify.rs
//
// Digest rendering and delivery. Delivery is best-effort: a failed send is
// logged and swallowed, unlike fetch/config errors which abort the run.

use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::Error;
use crate::matcher::EventRow;

pub const TABLE_HEADERS: [&str; 7] = [
    "Date/Time",
    "Event Title @ Venue",
    "Tags",
    "Price | Age",
    "Organizers",
    "Links",
    "Date (sortable)",
];

/// What happened to the message.
#[derive(Debug)]
pub enum NotifyOutcome {
    /// Rendered and printed, nothing sent.
    DryRun,
    /// Provider accepted the message; carries its response body verbatim.
    Sent(Value),
    /// Provider call failed. Deliberately non-fatal.
    SendFailed(String),
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Render the digest and either print it (dry run) or post it to the
/// Resend API. The sender identity is required before anything else
/// happens, dry run included; the recipient and API key are not
/// pre-validated and a bad send just comes back as `SendFailed`.
pub fn send_email(
    config: &Config,
    matches: &[EventRow],
    dry_run: bool,
) -> Result<NotifyOutcome, Error> {
    let from = config
        .email_user
        .as_deref()
        .ok_or(Error::Config("EMAIL_USER is not set"))?;

    let week_of = Local::now().format("%Y-%m-%d").to_string();
    let subject = format!(
        "New hardstyle/hardcore/hard dance events found on 19hz.info! (week of {week_of})"
    );
    let text = text_body(matches);
    let html = html_body(matches, &config.event_url, &week_of);

    if dry_run {
        let to = config.email_to.as_deref().unwrap_or("(unset)");
        println!("DRY RUN: Would send the following email:");
        println!("From: {from}");
        println!("To: {to}");
        println!("Subject: {subject}");
        println!("Text Body:");
        println!("{text}");
        println!("HTML Body:");
        println!("{html}");
        println!("\nMatches:");
        for row in matches {
            println!("{}", row_line(row));
        }
        return Ok(NotifyOutcome::DryRun);
    }

    let to = config.email_to.as_deref().unwrap_or_default();
    let payload = SendRequest {
        from,
        to: [to],
        subject: &subject,
        text: &text,
        html: &html,
    };

    let client = reqwest::blocking::Client::new();
    let sent = client
        .post(config.resend_endpoint.as_str())
        .bearer_auth(config.resend_api_key.as_deref().unwrap_or_default())
        .json(&payload)
        .send();

    match sent {
        Ok(resp) if resp.status().is_success() => {
            let body: Value = resp.json().unwrap_or(Value::Null);
            tracing::info!("email sent, response: {body}");
            Ok(NotifyOutcome::Sent(body))
        }
        Ok(resp) => {
            let reason = format!("HTTP {}", resp.status());
            tracing::error!("error sending email: {reason}");
            Ok(NotifyOutcome::SendFailed(reason))
        }
        Err(e) => {
            tracing::error!("error sending email: {e}");
            Ok(NotifyOutcome::SendFailed(e.to_string()))
        }
    }
}

/// Plain-text body: one line per row, blank line between rows. Joins the
/// columns that exist, up to 7; no padding.
pub fn text_body(matches: &[EventRow]) -> String {
    matches
        .iter()
        .map(|row| row_line(row))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn row_line(row: &EventRow) -> String {
    row.iter()
        .take(7)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// HTML body: fixed 7-column header, one row per match padded to exactly
/// 7 cells. Cell text is interpolated as-is, no escaping; the listing
/// page is the only input.
pub fn html_body(matches: &[EventRow], event_url: &str, week_of: &str) -> String {
    let headers: String = TABLE_HEADERS
        .iter()
        .map(|h| format!("<th>{h}</th>"))
        .collect();

    let mut rows = String::new();
    for row in matches {
        rows.push_str("<tr>");
        for i in 0..7 {
            let col = row.get(i).map(String::as_str).unwrap_or("");
            rows.push_str(&format!("<td>{col}</td>"));
        }
        rows.push_str("</tr>");
    }

    format!(
        "\
<html>
  <body>
    <h2>New hardstyle/hardcore/hard dance events found on <a href=\"{event_url}\">19hz.info</a>! (week of {week_of})</h2>
    <table border=\"1\" cellpadding=\"8\" cellspacing=\"0\">
      <thead>
        <tr>{headers}</tr>
      </thead>
      <tbody>
        {rows}
      </tbody>
    </table>
  </body>
</html>
"
    )
}
