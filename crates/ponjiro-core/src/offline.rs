//! 外部サービスなしで組み立てるオフライン日記。
//!
//! LLM が使えないときの代替であり、LLM の出力で上書きする前の下書きでもある。
//! 日付が同じなら常に同じ内容になる。

use crate::{
    day_info::DayInfo,
    history::{AvoidOptions, Child, Motif},
    phrases::*,
    random::{SeedPurpose, SeededRandom, pick_from},
    side_job::SideJobPlan,
};

/// 日記の各欄。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diary {
    /// 今日のひとこと
    pub quip: String,
    pub work: String,
    pub work_learning: String,
    pub money: String,
    pub money_tip: String,
    pub parenting: String,
    pub dad_point: String,
    pub hobby: String,
    /// 気分（0〜10）
    pub mood: u8,
    pub thanks: String,
    pub tomorrow: String,
    pub trend: String,
}

impl Diary {
    /// 文章の欄をすべて返す（気分を除く）。
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        [
            &self.quip,
            &self.work,
            &self.work_learning,
            &self.money,
            &self.money_tip,
            &self.parenting,
            &self.dad_point,
            &self.hobby,
            &self.thanks,
            &self.tomorrow,
            &self.trend,
        ]
        .into_iter()
        .map(String::as_str)
    }
}

/// オフライン日記を組み立てる。
///
/// 乱数は `SeedPurpose::OfflineDiary` の専用シードで、引く順番は固定。
pub fn compose_offline_diary(day: &DayInfo, side_job: &SideJobPlan, avoid: &AvoidOptions) -> Diary {
    let mut rng = day.date_key.rng(SeedPurpose::OfflineDiary);
    let event = day.event;
    let branch = |workday: &'static [&'static str], day_off: &'static [&'static str]| {
        if day.is_workday { workday } else { day_off }
    };

    let weather = pick(&mut rng, day.season.weather_phrases);
    let quip_pool = with_extras(
        branch(QUIPS_WORKDAY, QUIPS_DAY_OFF),
        event.map(|e| e.quip_extras),
    );
    let mut quip = String::new();
    if let Some(name) = day.holiday_name {
        quip.push_str(&format!("今日は{name}。"));
    }
    quip.push_str(weather);
    quip.push_str(pick(&mut rng, &quip_pool));

    let work_pool = if side_job.is_today {
        WORK_SIDE_JOB_DAY
    } else {
        branch(WORK_WORKDAY, WORK_DAY_OFF)
    };
    let work = format!(
        "{}今日の焦点は「{}」。",
        pick(&mut rng, work_pool),
        day.focus
    );
    let work_learning = pick(&mut rng, WORK_LEARNINGS);

    let money_pool = with_extras(
        branch(MONEY_WORKDAY, MONEY_DAY_OFF),
        event.map(|e| e.money_extras),
    );
    let money = pick_avoiding(&mut rng, &money_pool, |p| {
        avoid.avoids(Motif::SideJob) && Motif::SideJob.matches(p)
    });
    let money_tip = pick(&mut rng, MONEY_TIPS);

    let parenting_pool = with_extras(
        branch(PARENTING_WORKDAY, PARENTING_DAY_OFF),
        event.map(|e| e.parenting_extras),
    );
    let parenting = pick_avoiding(&mut rng, &parenting_pool, |p| {
        avoid.avoid_child.is_some() && Child::first_mentioned(p) == avoid.avoid_child
    });
    let dad_point = pick(&mut rng, DAD_POINTS);

    let hobby_pool = with_extras(
        branch(HOBBY_WORKDAY, HOBBY_DAY_OFF),
        event.map(|e| e.hobby_extras),
    );
    let hobby = pick_avoiding(&mut rng, &hobby_pool, |p| {
        avoid.avoids(Motif::Game) && Motif::Game.matches(p)
    });

    let baseline = if day.is_workday { 6 } else { 7 };
    let mood = (baseline + (rng.next_f64() * 3.0).floor() as u8).clamp(3, 10);

    let thanks = pick(&mut rng, THANKS);
    let tomorrow = pick(&mut rng, branch(TOMORROW_WORKDAY, TOMORROW_DAY_OFF));

    let topics = with_extras(day.season.trend_topics, event.map(|e| e.trend_topics));
    let topic = pick(&mut rng, &topics);
    let trend = pick(&mut rng, TREND_TEMPLATES).replace("{topic}", topic);

    Diary {
        quip,
        work,
        work_learning: work_learning.to_string(),
        money: money.to_string(),
        money_tip: money_tip.to_string(),
        parenting: parenting.to_string(),
        dad_point: dad_point.to_string(),
        hobby: hobby.to_string(),
        mood,
        thanks: thanks.to_string(),
        tomorrow: tomorrow.to_string(),
        trend,
    }
}

fn pick(rng: &mut SeededRandom, pool: &[&'static str]) -> &'static str {
    pick_from(rng, pool).copied().unwrap_or_default()
}

/// 除外条件に合う候補を除いて選ぶ。全部除外されたら元の候補から選ぶ。
fn pick_avoiding(
    rng: &mut SeededRandom,
    pool: &[&'static str],
    excluded: impl Fn(&str) -> bool,
) -> &'static str {
    let filtered: Vec<&'static str> = pool.iter().copied().filter(|p| !excluded(p)).collect();
    if filtered.is_empty() {
        pick(rng, pool)
    } else {
        pick(rng, &filtered)
    }
}

fn with_extras(
    base: &'static [&'static str],
    extras: Option<&'static [&'static str]>,
) -> Vec<&'static str> {
    base.iter()
        .chain(extras.unwrap_or_default())
        .copied()
        .collect()
}
