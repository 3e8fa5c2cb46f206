// src/matcher.rs
//
// Row filtering over the fetched listing. One pass, no cross-row state.

use chrono::{Duration, NaiveDate};
use scraper::{ElementRef, Html, Selector};

use crate::config::LOOKAHEAD_DAYS;
use crate::sanitize::normalize_ws;

/// One table row: cell texts in source order. No fixed schema beyond the
/// positional convention below; padding to 7 happens only at render time.
pub type EventRow = Vec<String>;

// Column roles, 0-indexed.
pub const COL_TAGS: usize = 2;
pub const COL_DATE_SORTABLE: usize = 6;

/// Matches for one run, in document order, plus a diagnostic counter for
/// rows dropped because their date cell did not parse.
#[derive(Debug, Default)]
pub struct Matches {
    pub rows: Vec<EventRow>,
    pub skipped_bad_dates: usize,
}

impl Matches {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Walk every `<tr>` in the document and keep the rows that
/// 1. have at least 7 `<td>` cells,
/// 2. carry a sortable date in cell 6 that parses as `YYYY/MM/DD` and
///    falls within `[today, today + 7 days]` inclusive on both ends,
/// 3. have a tags cell whose lowercased text contains at least one of the
///    keywords as a substring.
///
/// Rows failing the date parse vanish silently; only the counter records
/// them. Document order is preserved and nothing is deduplicated.
pub fn find_matching_events(html: &str, keywords: &[&str], today: NaiveDate) -> Matches {
    let doc = Html::parse_document(html);
    let tr_sel = Selector::parse("tr").unwrap();
    let td_sel = Selector::parse("td").unwrap();

    let window_end = today + Duration::days(LOOKAHEAD_DAYS);
    let mut out = Matches::default();

    for row in doc.select(&tr_sel) {
        let cells: Vec<String> = row.select(&td_sel).map(cell_text).collect();

        // Header/footer/malformed rows
        if cells.len() < 7 {
            continue;
        }

        let date = match NaiveDate::parse_from_str(&cells[COL_DATE_SORTABLE], "%Y/%m/%d") {
            Ok(d) => d,
            Err(_) => {
                out.skipped_bad_dates += 1;
                continue;
            }
        };
        if date < today || date > window_end {
            continue;
        }

        // Substring match, not token match: "hardcore" matches inside
        // "superhardcored".
        let tags = cells[COL_TAGS].to_lowercase();
        if keywords.iter().any(|kw| tags.contains(kw)) {
            out.rows.push(cells);
        }
    }

    out
}

fn cell_text(cell: ElementRef) -> String {
    normalize_ws(&cell.text().collect::<Vec<_>>().join(" "))
}
