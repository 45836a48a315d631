// ==========================================
// BVCR điện lạnh - CSV parser
// ==========================================
// Forgiving character-level parser for the spreadsheet CSV export.
// The export is mechanical but the sheet content is hand-edited, so
// the parser never raises: malformed quoting degrades to whatever the
// scan produces, and shape mismatches are padded or truncated against
// the header row.
// ==========================================

use std::collections::HashMap;

/// One spreadsheet row, keyed by trimmed header. Headers are not
/// guaranteed unique in the source; a later duplicate header wins.
pub type RawRow = HashMap<String, String>;

/// Parse raw CSV text into header-keyed rows.
///
/// Semantics:
/// - double-quoted fields may contain commas and newlines;
/// - `""` inside a quoted run appends a literal quote without closing
///   the field; the in-quotes flag only toggles on an unescaped quote;
/// - `\n` and `\r\n` both terminate a row (`\r\n` consumed together);
/// - every field is trimmed of surrounding whitespace;
/// - rows whose fields are all empty after trim are dropped;
/// - an unterminated final field/row is still flushed;
/// - the first retained row is the header; data rows shorter than the
///   header are padded with `""`, longer rows lose the excess fields.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let rows = split_rows(text);
    let mut rows = rows.into_iter();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|h| h.trim().to_string()).collect(),
        None => return Vec::new(),
    };

    rows.map(|row| {
        let mut map = RawRow::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            let value = row.get(idx).map(|v| v.trim()).unwrap_or("");
            map.insert(header.clone(), value.to_string());
        }
        map
    })
    .collect()
}

/// Character scan of the CSV text into trimmed field matrices, blank
/// rows already dropped.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(field.trim().to_string());
                field.clear();
            }
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(field.trim().to_string());
                field.clear();
                if row.iter().any(|cell| !cell.is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field.trim().to_string());
        if row.iter().any(|cell| !cell.is_empty()) {
            rows.push(row);
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rows() {
        let rows = parse_csv("a,b,c\n1,2,3\n4,5,6\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("a"), Some(&"1".to_string()));
        assert_eq!(rows[1].get("c"), Some(&"6".to_string()));
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn test_quoted_field_with_comma_newline_and_escaped_quote() {
        let rows = parse_csv("h1,h2\n\"a,b\nc\"\"d\",x\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("h1"), Some(&"a,b\nc\"d".to_string()));
        assert_eq!(rows[0].get("h2"), Some(&"x".to_string()));
    }

    #[test]
    fn test_crlf_terminators() {
        let rows = parse_csv("a,b\r\n1,2\r\n3,4");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("b"), Some(&"4".to_string()));
    }

    #[test]
    fn test_blank_rows_dropped() {
        let rows = parse_csv("a,b\n1,2\n,\n   ,  \n3,4\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_unterminated_final_field_flushed() {
        let rows = parse_csv("a,b\n1,2\n3,4");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("a"), Some(&"3".to_string()));
        assert_eq!(rows[1].get("b"), Some(&"4".to_string()));
    }

    #[test]
    fn test_short_rows_padded_long_rows_truncated() {
        let rows = parse_csv("a,b,c\n1\n1,2,3,4\n");
        assert_eq!(rows[0].get("b"), Some(&"".to_string()));
        assert_eq!(rows[0].get("c"), Some(&"".to_string()));
        // the fourth field of the long row is never read
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[1].get("c"), Some(&"3".to_string()));
    }

    #[test]
    fn test_values_trimmed() {
        let rows = parse_csv(" a , b \n  1  ,  2  \n");
        assert_eq!(rows[0].get("a"), Some(&"1".to_string()));
        assert_eq!(rows[0].get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_duplicate_header_later_wins() {
        let rows = parse_csv("a,a\n1,2\n");
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0].get("a"), Some(&"2".to_string()));
    }

    #[test]
    fn test_numeric_text_carried_verbatim() {
        // "1,0" is two fields, never a European decimal
        let rows = parse_csv("a,b\n1,0\n");
        assert_eq!(rows[0].get("a"), Some(&"1".to_string()));
        assert_eq!(rows[0].get("b"), Some(&"0".to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("\n\n").is_empty());
        // header only, no data rows
        assert!(parse_csv("a,b\n").is_empty());
    }

    #[test]
    fn test_row_count_matches_data_rows() {
        let mut text = String::from("h1,h2,h3\n");
        for i in 0..50 {
            text.push_str(&format!("{i},x,y\n"));
        }
        let rows = parse_csv(&text);
        assert_eq!(rows.len(), 50);
        assert!(rows.iter().all(|r| r.len() == 3));
    }
}
