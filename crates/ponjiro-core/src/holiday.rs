//! 日本の国民の祝日を計算する。
//!
//! 固定日・ハッピーマンデー・春分/秋分（近似式）に加え、
//! 振替休日と国民の休日（祝日に挟まれた日）を扱う。
//! 年ごとの結果は [`HolidayCalendar`] がキャッシュし、一度計算した年は以後変更しない。

use std::{
    collections::{BTreeMap, HashMap},
    ops::RangeInclusive,
    sync::{Arc, PoisonError, RwLock},
};

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::date_key::DateKey;

/// 春分・秋分の近似式が実際の官報と一致する範囲。
const EQUINOX_VALIDATED_YEARS: RangeInclusive<i32> = 1980..=2099;

/// 祝日の種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    NewYearsDay,
    ComingOfAgeDay,
    NationalFoundationDay,
    EmperorsBirthday,
    VernalEquinoxDay,
    ShowaDay,
    ConstitutionMemorialDay,
    GreeneryDay,
    ChildrensDay,
    MarineDay,
    MountainDay,
    RespectForTheAgedDay,
    AutumnalEquinoxDay,
    SportsDay,
    CultureDay,
    LaborThanksgivingDay,
    /// 振替休日
    Substitute,
    /// 国民の休日（祝日に挟まれた日）
    Citizens,
}

impl Holiday {
    pub fn name_jp(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "元日",
            Holiday::ComingOfAgeDay => "成人の日",
            Holiday::NationalFoundationDay => "建国記念の日",
            Holiday::EmperorsBirthday => "天皇誕生日",
            Holiday::VernalEquinoxDay => "春分の日",
            Holiday::ShowaDay => "昭和の日",
            Holiday::ConstitutionMemorialDay => "憲法記念日",
            Holiday::GreeneryDay => "みどりの日",
            Holiday::ChildrensDay => "こどもの日",
            Holiday::MarineDay => "海の日",
            Holiday::MountainDay => "山の日",
            Holiday::RespectForTheAgedDay => "敬老の日",
            Holiday::AutumnalEquinoxDay => "秋分の日",
            Holiday::SportsDay => "スポーツの日",
            Holiday::CultureDay => "文化の日",
            Holiday::LaborThanksgivingDay => "勤労感謝の日",
            Holiday::Substitute => "振替休日",
            Holiday::Citizens => "国民の休日",
        }
    }
}

/// 計算結果の精度。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// 近似式が検証済みの範囲内
    Validated,
    /// 範囲外のため春分・秋分がずれている可能性がある
    Approximate,
}

impl Precision {
    pub fn for_year(year: i32) -> Self {
        if EQUINOX_VALIDATED_YEARS.contains(&year) {
            Precision::Validated
        } else {
            Precision::Approximate
        }
    }
}

/// 1 年分の祝日集合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: i32,
    days: BTreeMap<NaiveDate, Holiday>,
}

impl HolidaySet {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        self.days.contains_key(&key.date())
    }

    pub fn get(&self, key: &DateKey) -> Option<Holiday> {
        self.days.get(&key.date()).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// 日付順に (日付キー, 祝日) を返す。
    pub fn iter(&self) -> impl Iterator<Item = (DateKey, Holiday)> + '_ {
        self.days
            .iter()
            .map(|(date, holiday)| (DateKey::from_naive(*date), *holiday))
    }

    pub fn precision(&self) -> Precision {
        Precision::for_year(self.year)
    }
}

/// 年ごとの祝日集合をキャッシュする祝日カレンダー。
///
/// 同じ年は 1 プロセスにつき一度だけ計算され、以後は同じ集合を共有する。
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    cache: RwLock<HashMap<i32, Arc<HolidaySet>>>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定年の祝日集合を返す。未計算なら計算してキャッシュする。
    pub fn holidays(&self, year: i32) -> Arc<HolidaySet> {
        if let Some(set) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Arc::clone(set);
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let set = cache.entry(year).or_insert_with(|| {
            let set = compute_holidays(year);
            if set.precision() == Precision::Approximate {
                tracing::warn!(
                    year,
                    "Equinox dates are approximated outside the validated range"
                );
            }
            tracing::debug!(year, count = set.len(), "Holiday set computed");
            Arc::new(set)
        });
        Arc::clone(set)
    }

    pub fn is_holiday(&self, key: &DateKey) -> bool {
        self.holidays(key.year()).contains(key)
    }

    pub fn holiday(&self, key: &DateKey) -> Option<Holiday> {
        self.holidays(key.year()).get(key)
    }

    /// キャッシュ済みの年数。
    pub fn cached_years(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// 春分の日（3 月の日）。
pub fn vernal_equinox_day(year: i32) -> i64 {
    equinox_day(20.8431, year)
}

/// 秋分の日（9 月の日）。
pub fn autumnal_equinox_day(year: i32) -> i64 {
    equinox_day(23.2488, year)
}

fn equinox_day(base: f64, year: i32) -> i64 {
    let offset = year - 1980;
    (base + 0.242194 * f64::from(offset)).floor() as i64 - i64::from(offset.div_euclid(4))
}

/// 指定年の祝日集合を計算する。
pub fn compute_holidays(year: i32) -> HolidaySet {
    let mut days = base_holidays(year);

    // 振替休日: 日曜の祝日から翌日以降で最初の平日を休みにする
    let sundays: Vec<NaiveDate> = days
        .keys()
        .copied()
        .filter(|d| d.weekday() == Weekday::Sun)
        .collect();
    for sunday in sundays {
        let mut day = sunday.succ_opt();
        while let Some(d) = day {
            if !days.contains_key(&d) {
                if d.year() == year {
                    days.insert(d, Holiday::Substitute);
                }
                break;
            }
            day = d.succ_opt();
        }
    }

    // 国民の休日: 前後が祝日の日
    let sandwiched: Vec<NaiveDate> = days_of_year(year)
        .filter(|d| !days.contains_key(d))
        .filter(|d| {
            let before = d.pred_opt().is_some_and(|p| days.contains_key(&p));
            let after = d.succ_opt().is_some_and(|n| days.contains_key(&n));
            before && after
        })
        .collect();
    for d in sandwiched {
        days.insert(d, Holiday::Citizens);
    }

    HolidaySet { year, days }
}

fn base_holidays(year: i32) -> BTreeMap<NaiveDate, Holiday> {
    let fixed = [
        (1, 1, Holiday::NewYearsDay),
        (2, 11, Holiday::NationalFoundationDay),
        (2, 23, Holiday::EmperorsBirthday),
        (4, 29, Holiday::ShowaDay),
        (5, 3, Holiday::ConstitutionMemorialDay),
        (5, 4, Holiday::GreeneryDay),
        (5, 5, Holiday::ChildrensDay),
        (8, 11, Holiday::MountainDay),
        (11, 3, Holiday::CultureDay),
        (11, 23, Holiday::LaborThanksgivingDay),
    ];
    let happy_mondays = [
        (1, 2, Holiday::ComingOfAgeDay),
        (7, 3, Holiday::MarineDay),
        (9, 3, Holiday::RespectForTheAgedDay),
        (10, 2, Holiday::SportsDay),
    ];

    let mut days = BTreeMap::new();
    for (month, day, holiday) in fixed {
        if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
            days.insert(d, holiday);
        }
    }
    for (month, n, holiday) in happy_mondays {
        if let Some(d) = nth_weekday(year, month, Weekday::Mon, n) {
            days.insert(d, holiday);
        }
    }
    if let Some(d) = day_of_month(year, 3, vernal_equinox_day(year)) {
        days.insert(d, Holiday::VernalEquinoxDay);
    }
    if let Some(d) = day_of_month(year, 9, autumnal_equinox_day(year)) {
        days.insert(d, Holiday::AutumnalEquinoxDay);
    }
    days
}

/// 月の第 n 週の指定曜日。最初の該当日から `7 * (n - 1)` 日進める。
pub(crate) fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let date = first.checked_add_days(Days::new(u64::from(offset + 7 * (n.max(1) - 1))))?;
    (date.month() == month).then_some(date)
}

fn day_of_month(year: i32, month: u32, day: i64) -> Option<NaiveDate> {
    let day = u32::try_from(day).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    first
        .into_iter()
        .flat_map(|d| d.iter_days())
        .take_while(move |d| d.year() == year)
}
