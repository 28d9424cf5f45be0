//! 投稿の見出しの並び順とタグ。

use crate::{
    day_info::{DayInfo, DayKind},
    random::SeedPurpose,
};

/// 本文の見出し。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Work,
    Money,
    Parenting,
    Hobby,
}

impl Section {
    pub fn heading_jp(&self) -> &'static str {
        match self {
            Section::Work => "仕事",
            Section::Money => "お金",
            Section::Parenting => "子育て",
            Section::Hobby => "趣味",
        }
    }
}

/// 見出しの順番を決める。
///
/// 平日は 仕事 → お金 → 子育て → 趣味 で固定。
/// 休みの日は子育てと趣味を先に置き（どちらが先かは日付で決まる）、お金、仕事と続ける。
pub fn section_order(day: &DayInfo) -> [Section; 4] {
    if day.is_workday {
        return [
            Section::Work,
            Section::Money,
            Section::Parenting,
            Section::Hobby,
        ];
    }

    let mut rng = day.date_key.rng(SeedPurpose::SectionOrder);
    let (first, second) = if rng.chance(0.5) {
        (Section::Parenting, Section::Hobby)
    } else {
        (Section::Hobby, Section::Parenting)
    };
    [first, second, Section::Money, Section::Work]
}

/// 投稿のタグ。重複は除いて、出てきた順に並べる。
pub fn post_tags(day: &DayInfo) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut push = |tag: &str| {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    };

    for tag in ["日記", "お金", "子育て", "趣味"] {
        push(tag);
    }
    match day.day_kind {
        DayKind::Weekday => push("仕事"),
        DayKind::Weekend => push("休日"),
        DayKind::Holiday => push("祝日"),
    }
    push(day.season.label);
    if let Some(event) = day.event {
        for tag in event.tags {
            push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{date_key::DateKey, day_info::resolve_day_info, holiday::HolidayCalendar};

    fn resolve(y: i32, m: u32, d: u32) -> DayInfo {
        resolve_day_info(DateKey::new(y, m, d).unwrap(), &HolidayCalendar::new())
    }

    #[test]
    fn test_workday_order_is_fixed() {
        let info = resolve(2024, 1, 9);
        assert_eq!(
            section_order(&info),
            [
                Section::Work,
                Section::Money,
                Section::Parenting,
                Section::Hobby
            ]
        );
    }

    #[test]
    fn test_day_off_puts_family_and_hobby_first() {
        let calendar = HolidayCalendar::new();
        let mut seen_parenting_first = false;
        let mut seen_hobby_first = false;
        let mut date = DateKey::new(2024, 1, 1).unwrap().date();
        for _ in 0..120 {
            let info = resolve_day_info(DateKey::from_naive(date), &calendar);
            if !info.is_workday {
                let order = section_order(&info);
                assert_eq!(&order[2..], &[Section::Money, Section::Work]);
                match order[0] {
                    Section::Parenting => seen_parenting_first = true,
                    Section::Hobby => seen_hobby_first = true,
                    other => panic!("unexpected first section {other:?}"),
                }
                assert_eq!(section_order(&info), order);
            }
            date = date.succ_opt().unwrap();
        }
        assert!(seen_parenting_first && seen_hobby_first);
    }

    #[test]
    fn test_tags() {
        let info = resolve(2024, 1, 9);
        assert_eq!(
            post_tags(&info),
            vec!["日記", "お金", "子育て", "趣味", "仕事", info.season.label]
        );

        let info = resolve(2024, 1, 8);
        assert!(post_tags(&info).contains(&"祝日".to_string()));
        assert!(!post_tags(&info).contains(&"仕事".to_string()));

        let info = resolve(2024, 1, 13);
        assert!(post_tags(&info).contains(&"休日".to_string()));
    }

    #[test]
    fn test_event_tags_are_appended_once() {
        // 大晦日のタグは「大晦日」「年末」。冬の季節ラベルとは重ならない
        let info = resolve(2024, 12, 31);
        let tags = post_tags(&info);
        assert!(tags.ends_with(&["大晦日".to_string(), "年末".to_string()]));
        let unique: std::collections::HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }
}
