// tests/matcher.rs
//
// Row-filtering behavior over synthetic listing documents.

use chrono::NaiveDate;
use hz_watch::config::KEYWORDS;
use hz_watch::matcher::find_matching_events;

fn row(cells: &[&str]) -> String {
    let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
    format!("<tr>{tds}</tr>")
}

fn doc(rows: &[String]) -> String {
    format!(
        "<html><body><table><tbody>{}</tbody></table></body></html>",
        rows.concat()
    )
}

fn full_row(tags: &str, date: &str) -> String {
    row(&[
        "3/1 9pm",
        "Foo @ Bar",
        tags,
        "$20|21+",
        "ACME",
        "link",
        date,
    ])
}

fn feb25() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 25).unwrap()
}

#[test]
fn matching_row_included_with_all_cells() {
    let html = doc(&[full_row("Hardcore Rave", "2025/03/01")]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert_eq!(m.len(), 1);
    assert_eq!(
        m.rows[0],
        vec![
            "3/1 9pm",
            "Foo @ Bar",
            "Hardcore Rave",
            "$20|21+",
            "ACME",
            "link",
            "2025/03/01"
        ]
    );
}

#[test]
fn non_matching_tags_excluded() {
    let html = doc(&[full_row("Techno Night", "2025/03/01")]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert!(m.is_empty());
}

#[test]
fn wrong_date_format_skipped_silently() {
    // US-style date: parse failure, row vanishes, counter records it.
    let html = doc(&[full_row("Hardcore Rave", "03/01/2025")]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert!(m.is_empty());
    assert_eq!(m.skipped_bad_dates, 1);
}

#[test]
fn short_rows_excluded_regardless_of_content() {
    // Six cells; tags and date would both match.
    let html = doc(&[row(&[
        "3/1 9pm",
        "Foo @ Bar",
        "Hardcore Rave",
        "$20|21+",
        "ACME",
        "2025/03/01",
    ])]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert!(m.is_empty());
    assert_eq!(m.skipped_bad_dates, 0);
}

#[test]
fn header_row_with_th_cells_excluded() {
    let header = "<tr><th>Date</th><th>Title</th><th>Tags</th><th>Price</th>\
                  <th>Org</th><th>Links</th><th>Sortable</th></tr>";
    let html = doc(&[header.to_string(), full_row("Hardstyle", "2025/02/26")]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert_eq!(m.len(), 1);
}

#[test]
fn window_inclusive_on_both_ends() {
    let today = feb25();
    for (date, expect) in [
        ("2025/02/24", false), // yesterday
        ("2025/02/25", true),  // today
        ("2025/03/04", true),  // today + 7
        ("2025/03/05", false), // today + 8
    ] {
        let html = doc(&[full_row("Hardstyle", date)]);
        let m = find_matching_events(&html, &KEYWORDS, today);
        assert_eq!(m.len(), usize::from(expect), "date {date}");
    }
}

#[test]
fn keyword_match_is_substring_not_token() {
    let html = doc(&[full_row("Superhardcored Beats", "2025/03/01")]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert_eq!(m.len(), 1);

    // "hard style" with a space contains neither keyword.
    let html = doc(&[full_row("Hard Style", "2025/03/01")]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert!(m.is_empty());
}

#[test]
fn keyword_match_is_case_insensitive() {
    let html = doc(&[full_row("HARDSTYLE TAKEOVER", "2025/03/01")]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert_eq!(m.len(), 1);
}

#[test]
fn source_order_preserved_and_no_dedup() {
    let first = full_row("Hardcore A", "2025/02/26");
    let skipped = full_row("House", "2025/02/26");
    let second = full_row("Hardstyle B", "2025/02/27");
    let dup = second.clone();
    let html = doc(&[first, skipped, second, dup]);

    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert_eq!(m.len(), 3);
    assert_eq!(m.rows[0][2], "Hardcore A");
    assert_eq!(m.rows[1][2], "Hardstyle B");
    assert_eq!(m.rows[2][2], "Hardstyle B");
}

#[test]
fn cell_whitespace_collapsed_and_trimmed() {
    let html = doc(&[row(&[
        "\n  3/1   9pm ",
        "Foo\n@\nBar",
        "  Hardcore   Rave ",
        "$20|21+",
        "ACME",
        "link",
        " 2025/03/01\n",
    ])]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert_eq!(m.len(), 1);
    assert_eq!(m.rows[0][0], "3/1 9pm");
    assert_eq!(m.rows[0][1], "Foo @ Bar");
    assert_eq!(m.rows[0][6], "2025/03/01");
}

#[test]
fn nested_markup_in_cells_flattened_to_text() {
    let linky = row(&[
        "3/1 9pm",
        "<b>Foo</b> @ <i>Bar</i>",
        "Hardcore Rave",
        "$20|21+",
        "ACME",
        "<a href=\"http://x\">tickets</a>",
        "2025/03/01",
    ]);
    let html = doc(&[linky]);
    let m = find_matching_events(&html, &KEYWORDS, feb25());
    assert_eq!(m.len(), 1);
    assert_eq!(m.rows[0][1], "Foo @ Bar");
    assert_eq!(m.rows[0][5], "tickets");
}
