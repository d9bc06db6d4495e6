use chrono::{DateTime, Local};

/// Current local time.
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Format a local time the way session records carry it (RFC 3339, second precision).
pub fn format_local(time: &DateTime<Local>) -> String {
    time.to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_local_second_precision() {
        // テスト項目: ローカル時刻が秒精度の RFC 3339 形式で整形される
        // given (前提条件):
        let time = Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 15).unwrap();

        // when (操作):
        let formatted = format_local(&time);

        // then (期待する結果):
        assert!(formatted.starts_with("2024-03-01T09:30:15"));
        assert!(!formatted.contains('.'));
    }
}
