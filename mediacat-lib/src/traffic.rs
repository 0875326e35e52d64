//! Traffic-code extraction.
//!
//! A traffic code is the 6-digit cross-system identifier (always starting
//! with `0`) embedded in an asset's display name. The code is wrapped in
//! the `="NNNNNN"` form so spreadsheet tools keep it as text instead of
//! coercing it to a number and dropping the leading zero.

/// Extract the traffic code from a normalized name.
///
/// A name that itself starts with `0` contributes its first 6 characters
/// verbatim. Otherwise the leftmost `0` followed by five digits is taken,
/// with any surrounding `_`/`-` separators ignored. No match means no
/// code; the failure is non-fatal.
pub fn extract_traffic_code(name: &str) -> Option<String> {
    if name.starts_with('0') {
        let code: String = name.chars().take(6).collect();
        return Some(quote(&code));
    }

    let bytes = name.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] == b'0'
            && bytes
                .get(i + 1..i + 6)
                .is_some_and(|rest| rest.iter().all(|b| b.is_ascii_digit()))
        {
            return Some(quote(&name[i..i + 6]));
        }
    }
    None
}

/// Spreadsheet-safe text-preserving quoting.
fn quote(code: &str) -> String {
    format!("=\"{code}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_takes_first_six_verbatim() {
        assert_eq!(
            extract_traffic_code("051637_AIRPORTSECURITY"),
            Some("=\"051637\"".to_string())
        );
        // Verbatim even when the tail is not numeric.
        assert_eq!(
            extract_traffic_code("0ABCDE_SHOW"),
            Some("=\"0ABCDE\"".to_string())
        );
    }

    #[test]
    fn short_leading_zero_name_is_taken_whole() {
        assert_eq!(extract_traffic_code("0123"), Some("=\"0123\"".to_string()));
    }

    #[test]
    fn embedded_code_is_found_and_unquoted_of_separators() {
        assert_eq!(
            extract_traffic_code("SHOW_051637_CUT"),
            Some("=\"051637\"".to_string())
        );
        assert_eq!(
            extract_traffic_code("SHOW-051637-CUT"),
            Some("=\"051637\"".to_string())
        );
    }

    #[test]
    fn leftmost_embedded_code_wins() {
        assert_eq!(
            extract_traffic_code("SHOW_012345_067890"),
            Some("=\"012345\"".to_string())
        );
    }

    #[test]
    fn no_code_yields_none() {
        assert_eq!(extract_traffic_code("SHOW_FINAL_CUT"), None);
        // 0 followed by too few digits.
        assert_eq!(extract_traffic_code("SHOW_0123_CUT"), None);
        // First digit is not 0.
        assert_eq!(extract_traffic_code("SHOW_123456_CUT"), None);
    }
}
