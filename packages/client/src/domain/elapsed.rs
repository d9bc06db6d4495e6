//! Study clock value object.

use std::{fmt, str::FromStr};

use super::error::ValueObjectError;

/// Elapsed study time with one-second resolution, shown as `HH:MM:SS`.
///
/// Hours are not wrapped: 100 hours renders as `100:00:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElapsedTime(u64);

impl ElapsedTime {
    pub const ZERO: Self = Self(0);

    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Advance by one logical tick (one second).
    pub fn tick(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl FromStr for ElapsedTime {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueObjectError::ElapsedTimeInvalidFormat(s.to_string());

        let parts: Vec<&str> = s.trim().split(':').collect();
        let [hours, minutes, seconds] = parts.as_slice() else {
            return Err(invalid());
        };
        let hours: u64 = hours.parse().map_err(|_| invalid())?;
        let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
        if minutes >= 60 || seconds >= 60 {
            return Err(invalid());
        }
        hours
            .checked_mul(3600)
            .and_then(|secs| secs.checked_add(minutes * 60 + seconds))
            .map(Self)
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_renders_as_midnight() {
        // テスト項目: 初期値は 00:00:00 と表示される
        // then (期待する結果):
        assert_eq!(ElapsedTime::ZERO.to_string(), "00:00:00");
    }

    #[test]
    fn test_125_ticks() {
        // テスト項目: 1 秒ごとに 125 回進めると 00:02:05 になる
        // given (前提条件):
        let mut elapsed = ElapsedTime::ZERO;

        // when (操作):
        for _ in 0..125 {
            elapsed.tick();
        }

        // then (期待する結果):
        assert_eq!(elapsed.to_string(), "00:02:05");
    }

    #[test]
    fn test_hours_are_not_wrapped() {
        // テスト項目: 100 時間以上でも時間の桁は折り返さない
        // then (期待する結果):
        assert_eq!(ElapsedTime::from_secs(3599).to_string(), "00:59:59");
        assert_eq!(ElapsedTime::from_secs(3600).to_string(), "01:00:00");
        assert_eq!(ElapsedTime::from_secs(360_000).to_string(), "100:00:00");
    }

    #[test]
    fn test_parse_clock_text() {
        // テスト項目: HH:MM:SS 形式の文字列を読み取れる
        // when (操作):
        let parsed: ElapsedTime = "00:05:00".parse().unwrap();

        // then (期待する結果):
        assert_eq!(parsed.as_secs(), 300);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        // テスト項目: 形式が不正な文字列は読み取れない
        // then (期待する結果):
        for text in ["5:00", "00:61:00", "aa:00:00", "00:00:60", ""] {
            assert_eq!(
                text.parse::<ElapsedTime>().unwrap_err(),
                ValueObjectError::ElapsedTimeInvalidFormat(text.to_string())
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflowing_hours() {
        // テスト項目: 秒数が u64 に収まらない時間は不正な形式として扱う
        // then (期待する結果):
        assert_eq!(
            "5124095576030431:00:15".parse::<ElapsedTime>().unwrap(),
            ElapsedTime::from_secs(u64::MAX)
        );
        assert!(matches!(
            "5124095576030431:00:16".parse::<ElapsedTime>(),
            Err(ValueObjectError::ElapsedTimeInvalidFormat(_))
        ));
        assert!(matches!(
            "5124095576030432:00:00".parse::<ElapsedTime>(),
            Err(ValueObjectError::ElapsedTimeInvalidFormat(_))
        ));
    }
}
