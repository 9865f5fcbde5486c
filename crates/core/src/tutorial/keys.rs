//! Row key policy for tutorial rows.
//!
//! Pure functions with no side effects. All tutorials live in a single
//! partition; the row key is either the decimal id or the title.

/// Partition shared by every tutorial row.
pub const PARTITION_KEY: &str = "Tutorial";

/// Row key of the id-keyed row.
///
/// Pattern: `<unique_id>` in decimal
pub fn id_row_key(unique_id: i64) -> String {
    unique_id.to_string()
}

/// Row key of the title-keyed row.
///
/// Pattern: `<title>` verbatim
pub fn title_row_key(title: &str) -> String {
    title.to_string()
}

/// Returns true if the row key parses as an integer, i.e. it is an id row.
pub fn is_id_row_key(row_key: &str) -> bool {
    row_key.parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_row_key() {
        assert_eq!(id_row_key(1), "1");
        assert_eq!(id_row_key(250), "250");
    }

    #[test]
    fn test_title_row_key() {
        assert_eq!(title_row_key("Getting started"), "Getting started");
    }

    #[test]
    fn test_is_id_row_key() {
        assert!(is_id_row_key("1"));
        assert!(is_id_row_key("42"));
        assert!(is_id_row_key("-3"));
        assert!(!is_id_row_key("Getting started"));
        assert!(!is_id_row_key(""));
        assert!(!is_id_row_key("1.5"));
        assert!(!is_id_row_key("12 Rules"));
    }
}
