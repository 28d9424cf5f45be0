//! 週末・祝日の日雇いバイト予定を決める。

use crate::{
    date_key::Weekday,
    day_info::DayInfo,
    random::{SeededRandom, pick_from},
};

/// 学校行事が入る確率。
const SCHOOL_EVENT_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedDay {
    None,
    Saturday,
    Sunday,
    Holiday,
}

impl PlannedDay {
    pub fn label_jp(&self) -> &'static str {
        match self {
            PlannedDay::None => "なし",
            PlannedDay::Saturday => "土曜",
            PlannedDay::Sunday => "日曜",
            PlannedDay::Holiday => "祝日",
        }
    }
}

/// 日雇いバイトの予定。本文への差し込みにだけ使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideJobPlan {
    pub school_event_occurred: bool,
    pub planned_day: PlannedDay,
    pub is_today: bool,
}

impl SideJobPlan {
    pub fn school_event_label(&self) -> &'static str {
        if self.school_event_occurred {
            "あり"
        } else {
            "なし"
        }
    }

    pub fn planned_day_label(&self) -> &'static str {
        self.planned_day.label_jp()
    }

    pub fn is_today_label(&self) -> &'static str {
        if self.is_today { "はい" } else { "いいえ" }
    }
}

/// 呼び出し側が用意した乱数で日雇い予定を決める。
///
/// 乱数は `SeedPurpose::SideJob` で作ったものを渡す想定。
pub fn plan_side_job(day: &DayInfo, rng: &mut SeededRandom) -> SideJobPlan {
    let school_event_occurred = rng.chance(SCHOOL_EVENT_PROBABILITY);

    let planned_day = if day.is_weekend || day.is_holiday {
        let mut candidates = match day.weekday {
            Weekday::Saturday => vec![PlannedDay::Saturday],
            Weekday::Sunday => vec![PlannedDay::Sunday],
            _ => vec![PlannedDay::Saturday, PlannedDay::Sunday],
        };
        if day.is_holiday && !day.is_weekend {
            candidates.push(PlannedDay::Holiday);
        }
        pick_from(rng, &candidates)
            .copied()
            .unwrap_or(PlannedDay::None)
    } else {
        PlannedDay::None
    };

    let is_today = match planned_day {
        PlannedDay::None => false,
        PlannedDay::Saturday => day.weekday == Weekday::Saturday,
        PlannedDay::Sunday => day.weekday == Weekday::Sunday,
        PlannedDay::Holiday => day.is_holiday,
    };

    SideJobPlan {
        school_event_occurred,
        planned_day,
        is_today,
    }
}
