use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use ponjiro_core::{
    AvoidOptions, DateKey, DayKind, Holiday, HolidayCalendar, SeedPurpose, compose_offline_diary,
    ensure_event_mention, mentions_event, plan_side_job, resolve_day_info, section_order,
};

fn run(key: DateKey, calendar: &HolidayCalendar) -> (ponjiro_core::DayInfo, ponjiro_core::Diary) {
    let info = resolve_day_info(key, calendar);
    let plan = plan_side_job(&info, &mut key.rng(SeedPurpose::SideJob));
    let mut diary = compose_offline_diary(&info, &plan, &AvoidOptions::default());
    ensure_event_mention(&mut diary, &info);
    (info, diary)
}

fn days(from: NaiveDate, count: usize) -> impl Iterator<Item = DateKey> {
    from.iter_days().take(count).map(DateKey::from_naive)
}

#[test]
fn same_date_gives_same_output_across_calendars() {
    let key = DateKey::new(2025, 8, 11).unwrap();
    let (info_a, diary_a) = run(key, &HolidayCalendar::new());
    let (info_b, diary_b) = run(key, &HolidayCalendar::new());
    assert_eq!(info_a, info_b);
    assert_eq!(diary_a, diary_b);
    assert_eq!(section_order(&info_a), section_order(&info_b));
}

#[test]
fn coming_of_age_day_end_to_end() {
    // 2024-01-08 月曜・成人の日
    let instant = Utc.with_ymd_and_hms(2024, 1, 7, 16, 30, 0).unwrap();
    let key = DateKey::from_instant(instant, &chrono_tz::Asia::Tokyo);
    assert_eq!(key.to_string(), "2024-01-08");

    let calendar = HolidayCalendar::new();
    let info = resolve_day_info(key, &calendar);
    assert_eq!(info.weekday.label_en(), "Monday");
    assert_eq!(info.weekday.label_jp(), "月曜日");
    assert!(info.is_holiday);
    assert!(!info.is_workday);
    assert_eq!(info.day_kind, DayKind::Holiday);
    assert_eq!(info.season.label, "冬");
    assert!(info.event.is_none());

    let plan = plan_side_job(&info, &mut key.rng(SeedPurpose::SideJob));
    let diary = compose_offline_diary(&info, &plan, &AvoidOptions::default());
    assert!(diary.texts().all(|t| !t.is_empty()));
    assert!((7..=9).contains(&diary.mood));
}

#[test]
fn holiday_samples() {
    let calendar = HolidayCalendar::new();
    for (y, m, d) in [(2024, 1, 1), (2024, 1, 8), (2024, 9, 22), (2024, 9, 23)] {
        assert!(
            calendar.is_holiday(&DateKey::new(y, m, d).unwrap()),
            "{y}-{m}-{d}"
        );
    }
    assert!(!calendar.is_holiday(&DateKey::new(2024, 9, 24).unwrap()));
}

#[test]
fn every_sunday_holiday_has_a_substitute() {
    let calendar = HolidayCalendar::new();
    for year in 1990..=2060 {
        for (key, _) in calendar.holidays(year).iter() {
            if key.date().weekday() != chrono::Weekday::Sun {
                continue;
            }
            // 祝日が続く間を進んだ先に振替休日がある
            let mut next = key.date();
            let found = loop {
                next = next.succ_opt().unwrap();
                match calendar.holiday(&DateKey::from_naive(next)) {
                    Some(Holiday::Substitute) => break true,
                    Some(_) => continue,
                    None => break false,
                }
            };
            assert!(found, "{key}: no substitute found");
        }
    }
}

#[test]
fn mood_stays_in_bounds_over_a_thousand_days() {
    let calendar = HolidayCalendar::new();
    let start = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
    for key in days(start, 1000) {
        let (info, diary) = run(key, &calendar);
        assert!((3..=10).contains(&diary.mood), "{key}");
        assert!(diary.texts().all(|t| !t.is_empty()), "{key}");
        assert_eq!(info.is_workday, !(info.is_weekend || info.is_holiday));
    }
}

#[test]
fn christmas_is_always_mentioned() {
    let calendar = HolidayCalendar::new();
    for year in 2000..=2040 {
        let key = DateKey::new(year, 12, 25).unwrap();
        let (info, diary) = run(key, &calendar);
        assert_eq!(info.event.map(|e| e.name_jp), Some("クリスマス"));
        assert!(mentions_event(&diary, &info), "{key}");
    }
}

#[test]
fn event_days_are_mentioned_over_several_years() {
    let calendar = HolidayCalendar::new();
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    for key in days(start, 365 * 3) {
        let (info, diary) = run(key, &calendar);
        assert!(mentions_event(&diary, &info), "{key}");
    }
}

#[test]
fn invalid_dates_are_rejected() {
    assert!(DateKey::new(2023, 2, 29).is_err());
    assert!("2024-13-01".parse::<DateKey>().is_err());
    assert!("2024-1-8".parse::<DateKey>().is_err());
    assert!("2024-02-29".parse::<DateKey>().is_ok());
}
