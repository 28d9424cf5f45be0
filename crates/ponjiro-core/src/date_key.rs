//! 日付キー（`YYYY-MM-DD`）と暦の基本ユーティリティ。

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

use crate::random::{SeedPurpose, SeededRandom};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid date key: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateKey(String),
}

/// タイムゾーン上の暦日（年・月・日）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// 瞬間を指定タイムゾーンの暦日に射影する。
///
/// オフセットや夏時間はタイムゾーン側の定義に従う。
pub fn civil_parts_in_zone<Tz: TimeZone>(instant: DateTime<Utc>, zone: &Tz) -> CivilDate {
    let local = instant.with_timezone(zone).date_naive();
    CivilDate {
        year: local.year(),
        month: local.month(),
        day: local.day(),
    }
}

/// 文字列の FNV-1a ハッシュ（32bit）。
///
/// すべての乱数シードの元になるため、プラットフォームに依存せず同じ値を返す。
pub fn hash_date_key(key: &str) -> u32 {
    key.bytes()
        .fold(FNV_OFFSET_BASIS, |h, b| (h ^ u32::from(b)).wrapping_mul(FNV_PRIME))
}

/// 1 日を表す正規化済みの日付キー。
///
/// 常に実在するグレゴリオ暦の日付を指す。文字列表現はゼロ埋めの `YYYY-MM-DD`。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// 年月日から日付キーを作る。実在しない日付はエラーになる。
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(0..=9999).contains(&year) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// 瞬間をタイムゾーン上の暦日として日付キーにする。
    pub fn from_instant<Tz: TimeZone>(instant: DateTime<Utc>, zone: &Tz) -> Self {
        Self(instant.with_timezone(zone).date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from(self.0.weekday())
    }

    /// 日付キー文字列のハッシュ値。
    pub fn hash(&self) -> u32 {
        hash_date_key(&self.to_string())
    }

    /// 用途ごとに独立したシードで乱数生成器を作る。
    pub fn rng(&self, purpose: SeedPurpose) -> SeededRandom {
        SeededRandom::new(self.hash() ^ purpose.salt())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidDateKey(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits = |range: std::ops::Range<usize>| -> Result<u32, CalendarError> {
            let part = &s[range];
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let year = digits(0..4)?;
        let month = digits(5..7)?;
        let day = digits(8..10)?;
        Self::new(year as i32, month, day)
    }
}

/// 曜日。英語と日本語のラベルを持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn label_en(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn label_jp(&self) -> &'static str {
        match self {
            Weekday::Monday => "月曜日",
            Weekday::Tuesday => "火曜日",
            Weekday::Wednesday => "水曜日",
            Weekday::Thursday => "木曜日",
            Weekday::Friday => "金曜日",
            Weekday::Saturday => "土曜日",
            Weekday::Sunday => "日曜日",
        }
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Tokyo;

    #[test]
    fn test_hash_known_vectors() {
        assert_eq!(hash_date_key(""), 0x811c_9dc5);
        assert_eq!(hash_date_key("a"), 0xe40c_292c);
        assert_eq!(hash_date_key("2024-01-08"), 0x5a34_0fce);
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        let key = DateKey::new(2024, 1, 8).unwrap();
        assert_eq!(key.to_string(), "2024-01-08");

        let key = DateKey::new(987, 3, 4).unwrap();
        assert_eq!(key.to_string(), "0987-03-04");
    }

    #[test]
    fn test_date_key_rejects_invalid_dates() {
        assert_eq!(
            DateKey::new(2023, 2, 29),
            Err(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(DateKey::new(2024, 13, 1).is_err());
        assert!(DateKey::new(2024, 4, 31).is_err());
        assert!(DateKey::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_date_key_parse() {
        let key: DateKey = "2024-09-23".parse().unwrap();
        assert_eq!((key.year(), key.month(), key.day()), (2024, 9, 23));

        assert!("2024-9-23".parse::<DateKey>().is_err());
        assert!("2024/09/23".parse::<DateKey>().is_err());
        assert!("2024-02-30".parse::<DateKey>().is_err());
        assert!("+024-01-01".parse::<DateKey>().is_err());
        assert!("".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_civil_parts_respect_zone_offset() {
        // 2024-01-07T15:30Z は東京では 1/8 の 0:30
        let instant = Utc.with_ymd_and_hms(2024, 1, 7, 15, 30, 0).unwrap();
        assert_eq!(
            civil_parts_in_zone(instant, &Tokyo),
            CivilDate {
                year: 2024,
                month: 1,
                day: 8
            }
        );
        assert_eq!(
            civil_parts_in_zone(instant, &Utc),
            CivilDate {
                year: 2024,
                month: 1,
                day: 7
            }
        );

        let key = DateKey::from_instant(instant, &Tokyo);
        assert_eq!(key.to_string(), "2024-01-08");
    }

    #[test]
    fn test_civil_parts_across_dst_zone() {
        // ニューヨークの夏時間 (UTC-4) でも暦日が正しく出る
        let instant = Utc.with_ymd_and_hms(2024, 7, 1, 3, 0, 0).unwrap();
        let parts = civil_parts_in_zone(instant, &chrono_tz::America::New_York);
        assert_eq!((parts.year, parts.month, parts.day), (2024, 6, 30));
    }

    #[test]
    fn test_weekday_labels() {
        let key = DateKey::new(2024, 1, 6).unwrap();
        assert_eq!(key.weekday(), Weekday::Saturday);
        assert_eq!(key.weekday().label_en(), "Saturday");
        assert!(key.weekday().is_weekend());

        let key = DateKey::new(2024, 1, 7).unwrap();
        assert_eq!(key.weekday(), Weekday::Sunday);
        assert_eq!(key.weekday().label_jp(), "日曜日");
    }

    #[test]
    fn test_date_key_serde_as_string() {
        let key = DateKey::new(2024, 12, 25).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-12-25\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
