//! Date stamps for published posts and exported drafts.

use chrono::Utc;

/// Current UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Current UTC timestamp as RFC 3339.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_shape() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }

    #[test]
    fn test_now_rfc3339_starts_with_today() {
        let now = now_rfc3339();
        assert!(now.contains('T'));
        assert!(now.starts_with(&today()));
    }
}
