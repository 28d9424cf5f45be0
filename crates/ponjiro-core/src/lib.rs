//! ぽん次郎日記の決定的な中核部分を提供するライブラリ。
//!
//! 日付キーと乱数、祝日計算、日付情報の解決、日雇い予定、
//! オフライン日記の生成までを外部通信なしで行う。
//! 同じ日付からは常に同じ結果が得られる。

mod date_key;
mod day_info;
mod event;
mod history;
mod holiday;
mod layout;
mod mention;
mod offline;
mod phrases;
mod random;
mod season;
mod side_job;

pub use date_key::{CalendarError, CivilDate, DateKey, Weekday, civil_parts_in_zone, hash_date_key};
pub use day_info::{DayInfo, DayKind, resolve_day_info};
pub use event::{EventKey, EventProfile, detect_event};
pub use history::{AvoidOptions, Child, HistoryEntry, Motif};
pub use holiday::{
    Holiday, HolidayCalendar, HolidaySet, Precision, autumnal_equinox_day, compute_holidays,
    vernal_equinox_day,
};
pub use layout::{Section, post_tags, section_order};
pub use mention::{ensure_event_mention, mentions_event};
pub use offline::{Diary, compose_offline_diary};
pub use random::{SeedPurpose, SeededRandom, pick_from};
pub use season::{SeasonKey, SeasonProfile};
pub use side_job::{PlannedDay, SideJobPlan, plan_side_job};
