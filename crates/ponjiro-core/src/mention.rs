//! イベントの日に、本文のどこかでイベントに触れていることを保証する。

use crate::{
    day_info::DayInfo,
    offline::Diary,
    random::{SeedPurpose, pick_from},
};

/// いずれかの欄にイベントのキーワードが含まれていれば true。
/// イベントがない日は常に true。
pub fn mentions_event(diary: &Diary, day: &DayInfo) -> bool {
    let Some(event) = day.event else {
        return true;
    };
    diary
        .texts()
        .any(|text| event.keywords.iter().any(|k| text.contains(k)))
}

/// イベントに触れていなければ、ひとことの末尾に一文を足す。
///
/// 足したときは true を返す。
pub fn ensure_event_mention(diary: &mut Diary, day: &DayInfo) -> bool {
    let Some(event) = day.event else {
        return false;
    };
    if mentions_event(diary, day) {
        return false;
    }

    let candidates: Vec<&'static str> = event
        .quip_extras
        .iter()
        .copied()
        .filter(|phrase| event.keywords.iter().any(|k| phrase.contains(k)))
        .collect();
    let mut rng = day.date_key.rng(SeedPurpose::EventMention);
    let guard = match pick_from(&mut rng, &candidates) {
        Some(phrase) => phrase.to_string(),
        None => format!("ちなみに今日は{}。", event.name_jp),
    };

    diary.quip.push_str(&guard);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        date_key::DateKey, day_info::resolve_day_info, history::AvoidOptions,
        holiday::HolidayCalendar, offline::compose_offline_diary, side_job::plan_side_job,
    };

    fn diary_for(key: DateKey) -> (DayInfo, Diary) {
        let info = resolve_day_info(key, &HolidayCalendar::new());
        let plan = plan_side_job(&info, &mut key.rng(SeedPurpose::SideJob));
        let diary = compose_offline_diary(&info, &plan, &AvoidOptions::default());
        (info, diary)
    }

    /// イベントに一切触れない日記にする。
    fn blank_out(diary: &mut Diary) {
        for field in [
            &mut diary.quip,
            &mut diary.work,
            &mut diary.work_learning,
            &mut diary.money,
            &mut diary.money_tip,
            &mut diary.parenting,
            &mut diary.dad_point,
            &mut diary.hobby,
            &mut diary.thanks,
            &mut diary.tomorrow,
            &mut diary.trend,
        ] {
            *field = "特に何もない一日。".to_string();
        }
    }

    #[test]
    fn test_no_event_needs_nothing() {
        let (info, mut diary) = diary_for(DateKey::new(2024, 1, 9).unwrap());
        assert!(info.event.is_none());
        let before = diary.clone();
        assert!(mentions_event(&diary, &info));
        assert!(!ensure_event_mention(&mut diary, &info));
        assert_eq!(diary, before);
    }

    #[test]
    fn test_guard_appends_keyword_phrase() {
        let (info, mut diary) = diary_for(DateKey::new(2024, 12, 25).unwrap());
        blank_out(&mut diary);
        assert!(!mentions_event(&diary, &info));

        assert!(ensure_event_mention(&mut diary, &info));
        assert!(diary.quip.starts_with("特に何もない一日。"));
        assert!(mentions_event(&diary, &info));
        // 2 回目は何もしない
        let once = diary.clone();
        assert!(!ensure_event_mention(&mut diary, &info));
        assert_eq!(diary, once);
    }

    #[test]
    fn test_guard_is_deterministic() {
        let key = DateKey::new(2024, 10, 31).unwrap();
        let (info, mut a) = diary_for(key);
        let (_, mut b) = diary_for(key);
        blank_out(&mut a);
        blank_out(&mut b);
        ensure_event_mention(&mut a, &info);
        ensure_event_mention(&mut b, &info);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_event_day_ends_up_mentioned() {
        for (m, d) in [
            (1, 1),
            (2, 14),
            (3, 20),
            (5, 12),
            (6, 16),
            (9, 22),
            (10, 31),
            (12, 24),
            (12, 25),
            (12, 30),
            (12, 31),
        ] {
            let (info, mut diary) = diary_for(DateKey::new(2024, m, d).unwrap());
            assert!(info.event.is_some(), "{m}/{d}");
            blank_out(&mut diary);
            ensure_event_mention(&mut diary, &info);
            assert!(mentions_event(&diary, &info), "{m}/{d}");
        }
    }
}
