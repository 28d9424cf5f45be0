//! 日付からその日の情報（平日/週末/祝日、季節、イベント、焦点とトーン）を組み立てる。

use crate::{
    date_key::{DateKey, Weekday},
    event::{EventProfile, detect_event},
    holiday::HolidayCalendar,
    random::{SeedPurpose, pick_from},
    season::{SeasonKey, SeasonProfile},
};

const WORKDAY_FOCUS: &[&str] = &[
    "会議の合間の雑務",
    "リモートワークの集中力",
    "常駐先とのやりとり",
    "在宅の昼ごはん",
    "締切前の段取り",
];

const HOLIDAY_FOCUS: &[&str] = &[
    "祝日の家族時間",
    "連休の過ごし方",
    "祝日の家事分担",
    "ゆっくり寝坊",
];

const WEEKEND_FOCUS: &[&str] = &[
    "週末の買い出し",
    "日雇いバイトの段取り",
    "子どもたちの予定",
    "週末の家計チェック",
    "部屋の片付け",
];

const TONES: &[&str] = &[
    "ほっこり",
    "ちょっと弱音",
    "前向き",
    "しみじみ",
    "ドタバタ",
    "のんびり",
];

/// 日の種類。祝日 > 週末 > 平日 の優先順位で決まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Weekend,
    Holiday,
}

impl DayKind {
    pub fn label_jp(&self) -> &'static str {
        match self {
            DayKind::Weekday => "平日",
            DayKind::Weekend => "週末",
            DayKind::Holiday => "祝日",
        }
    }
}

/// その日の情報。1 回の実行で 1 度だけ計算する。
#[derive(Debug, Clone, PartialEq)]
pub struct DayInfo {
    pub date_key: DateKey,
    pub weekday: Weekday,
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub is_workday: bool,
    pub day_kind: DayKind,
    /// 祝日名（祝日のときのみ）
    pub holiday_name: Option<&'static str>,
    pub season: &'static SeasonProfile,
    pub event: Option<&'static EventProfile>,
    pub focus: &'static str,
    pub tone: &'static str,
}

/// 日付キーから [`DayInfo`] を解決する。
pub fn resolve_day_info(date_key: DateKey, calendar: &HolidayCalendar) -> DayInfo {
    let weekday = date_key.weekday();
    let is_weekend = weekday.is_weekend();
    let holiday = calendar.holiday(&date_key);
    let is_holiday = holiday.is_some();
    let is_workday = !is_weekend && !is_holiday;

    let day_kind = if is_holiday {
        DayKind::Holiday
    } else if is_weekend {
        DayKind::Weekend
    } else {
        DayKind::Weekday
    };

    let season = SeasonKey::from_month(date_key.month()).profile();
    let event = detect_event(date_key.date()).map(|key| key.profile());

    let base_pool = if is_workday {
        WORKDAY_FOCUS
    } else if is_holiday {
        HOLIDAY_FOCUS
    } else {
        WEEKEND_FOCUS
    };
    let pool: Vec<&'static str> = event
        .map(|e| e.focus_candidates)
        .unwrap_or_default()
        .iter()
        .chain(base_pool)
        .copied()
        .collect();

    let mut rng = date_key.rng(SeedPurpose::FocusTone);
    let focus = pick_from(&mut rng, &pool).copied().unwrap_or_default();
    let tone = pick_from(&mut rng, TONES).copied().unwrap_or_default();

    DayInfo {
        date_key,
        weekday,
        is_weekend,
        is_holiday,
        is_workday,
        day_kind,
        holiday_name: holiday.map(|h| h.name_jp()),
        season,
        event,
        focus,
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKey;
    use chrono::Datelike;

    fn resolve(y: i32, m: u32, d: u32) -> DayInfo {
        resolve_day_info(DateKey::new(y, m, d).unwrap(), &HolidayCalendar::new())
    }

    #[test]
    fn test_coming_of_age_day() {
        let info = resolve(2024, 1, 8);
        assert_eq!(info.weekday, Weekday::Monday);
        assert!(info.is_holiday);
        assert!(!info.is_weekend);
        assert!(!info.is_workday);
        assert_eq!(info.day_kind, DayKind::Holiday);
        assert_eq!(info.holiday_name, Some("成人の日"));
        assert_eq!(info.season.key, SeasonKey::Winter);
        assert!(info.event.is_none());
        assert!(HOLIDAY_FOCUS.contains(&info.focus));
    }

    #[test]
    fn test_holiday_on_weekend_reports_holiday() {
        // 2024-02-11 は日曜の建国記念の日
        let info = resolve(2024, 2, 11);
        assert!(info.is_weekend);
        assert!(info.is_holiday);
        assert_eq!(info.day_kind, DayKind::Holiday);
    }

    #[test]
    fn test_plain_workday_and_weekend() {
        let info = resolve(2024, 1, 9);
        assert!(info.is_workday);
        assert_eq!(info.day_kind, DayKind::Weekday);
        assert!(WORKDAY_FOCUS.contains(&info.focus));

        let info = resolve(2024, 1, 13);
        assert!(info.is_weekend);
        assert!(!info.is_holiday);
        assert_eq!(info.day_kind, DayKind::Weekend);
        assert!(WEEKEND_FOCUS.contains(&info.focus));
    }

    #[test]
    fn test_event_focus_candidates_are_in_pool() {
        let info = resolve(2024, 12, 25);
        let event = info.event.unwrap();
        assert_eq!(event.key, EventKey::Christmas);
        assert!(event.focus_candidates.contains(&info.focus) || WORKDAY_FOCUS.contains(&info.focus));
    }

    #[test]
    fn test_focus_and_tone_are_deterministic() {
        for (m, d) in [(1, 8), (3, 20), (6, 16), (12, 31)] {
            let a = resolve(2024, m, d);
            let b = resolve(2024, m, d);
            assert_eq!(a, b);
            assert!(TONES.contains(&a.tone));
        }
    }

    #[test]
    fn test_workday_partition_over_a_year() {
        let calendar = HolidayCalendar::new();
        let mut date = DateKey::new(2025, 1, 1).unwrap().date();
        while date.year() == 2025 {
            let info = resolve_day_info(DateKey::from_naive(date), &calendar);
            assert_eq!(info.is_workday, !(info.is_weekend || info.is_holiday));
            let expected = match (info.is_holiday, info.is_weekend) {
                (true, _) => DayKind::Holiday,
                (false, true) => DayKind::Weekend,
                (false, false) => DayKind::Weekday,
            };
            assert_eq!(info.day_kind, expected);
            date = date.succ_opt().unwrap();
        }
    }
}
