// ==========================================
// BVCR điện lạnh - field resolver
// ==========================================
// Looks a logical field up by its ordered alias list. Total function:
// a missing field is an empty string, never an error.
// ==========================================

use crate::importer::csv_parser::RawRow;

/// Resolve a logical field against a row's actual headers.
///
/// For each alias in priority order, the row's keys are compared
/// case-insensitively after trimming both sides; the first alias whose
/// key holds a non-empty trimmed value wins. An earlier alias always
/// beats a later one, even when both are present. Returns `""` when
/// nothing matches.
pub fn resolve(row: &RawRow, aliases: &[&str]) -> String {
    for alias in aliases {
        let wanted = alias.trim().to_lowercase();
        for (key, value) in row {
            if key.trim().to_lowercase() == wanted {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_alias_wins() {
        let r = row(&[("A", "1"), ("B", "2")]);
        assert_eq!(resolve(&r, &["A", "B"]), "1");
        assert_eq!(resolve(&r, &["B", "A"]), "2");
    }

    #[test]
    fn test_falls_through_empty_values() {
        let r = row(&[("A", "   "), ("B", "2")]);
        assert_eq!(resolve(&r, &["A", "B"]), "2");
    }

    #[test]
    fn test_case_and_whitespace_insensitive_keys() {
        let r = row(&[(" a ", "1")]);
        assert_eq!(resolve(&r, &["A"]), "1");

        let r = row(&[("MÁY SỐ", "12")]);
        assert_eq!(resolve(&r, &["Máy số"]), "12");
    }

    #[test]
    fn test_value_trimmed() {
        let r = row(&[("A", "  1  ")]);
        assert_eq!(resolve(&r, &["A"]), "1");
    }

    #[test]
    fn test_no_match_is_empty_string() {
        let r = row(&[("A", "1")]);
        assert_eq!(resolve(&r, &["X", "Y"]), "");
        assert_eq!(resolve(&RawRow::new(), &["A"]), "");
        assert_eq!(resolve(&r, &[]), "");
    }
}
