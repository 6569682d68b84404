use chrono::{DateTime, Utc};

/// `YYYY-MM-DD` part of a timestamp, as shown on job cards.
pub fn date_only(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_part() {
        let dt: DateTime<Utc> = "2024-08-20T23:30:00Z".parse().unwrap();
        assert_eq!(date_only(dt), "2024-08-20");
    }
}
