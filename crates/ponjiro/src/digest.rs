//! 書き出し済みの日記から週・月のまとめページを作る。

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use ponjiro_core::DateKey;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use tracing::{info, warn};

use crate::{
    config::SiteConfig,
    post::{FrontMatter, local_datetime, post_path, split_front_matter, write_file},
};

const OPENING_PREFIX: &str = "今日のひとこと: ";
const MOOD_PREFIX: &str = "- 気分: ";

/// 月間まとめを出す日。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyRule {
    /// 月末にその月の分をまとめる
    #[default]
    LastDay,
    /// 月初に前月の分をまとめる
    FirstDay,
}

/// まとめページの作成タイミング。
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySchedule {
    /// 週間まとめを出す曜日。その日までの 7 日分をまとめる
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default = "default_weekly_on")]
    pub weekly_on: Weekday,
    #[serde(default)]
    pub monthly: MonthlyRule,
}

fn default_weekly_on() -> Weekday {
    Weekday::Sun
}

impl Default for SummarySchedule {
    fn default() -> Self {
        Self {
            weekly_on: default_weekly_on(),
            monthly: MonthlyRule::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestKind {
    Weekly,
    Monthly,
}

/// まとめの対象期間（両端を含む）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestPeriod {
    pub kind: DigestKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SummarySchedule {
    /// `today` に作るべきまとめを返す。
    pub fn due(&self, today: NaiveDate) -> Vec<DigestPeriod> {
        let mut due = Vec::new();

        if today.weekday() == self.weekly_on
            && let Some(start) = today.checked_sub_days(Days::new(6))
        {
            due.push(DigestPeriod {
                kind: DigestKind::Weekly,
                start,
                end: today,
            });
        }

        let month = match self.monthly {
            MonthlyRule::LastDay => today
                .succ_opt()
                .filter(|next| next.month() != today.month())
                .map(|_| today),
            MonthlyRule::FirstDay => (today.day() == 1).then(|| today.pred_opt()).flatten(),
        };
        if let Some(end) = month
            && let Some(start) = end.with_day(1)
        {
            due.push(DigestPeriod {
                kind: DigestKind::Monthly,
                start,
                end,
            });
        }

        due
    }
}

impl DigestPeriod {
    pub fn title(&self) -> String {
        match self.kind {
            DigestKind::Weekly => format!("{}〜{} 週間まとめ", self.start, self.end),
            DigestKind::Monthly => format!(
                "{:04}年{:02}月 月間まとめ",
                self.start.year(),
                self.start.month()
            ),
        }
    }

    /// `content/digests/weekly/YYYY-MM-DD.md` または `content/digests/monthly/YYYY-MM.md`
    pub fn path(&self, content_dir: &Path) -> PathBuf {
        let digests = content_dir.join("digests");
        match self.kind {
            DigestKind::Weekly => digests
                .join("weekly")
                .join(format!("{}.md", DateKey::from_naive(self.end))),
            DigestKind::Monthly => digests.join("monthly").join(format!(
                "{:04}-{:02}.md",
                self.start.year(),
                self.start.month()
            )),
        }
    }

    fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| *d <= self.end)
    }
}

/// まとめに載せる 1 日分の情報。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub date: DateKey,
    pub title: String,
    pub opening: Option<String>,
    pub mood: Option<u8>,
}

#[derive(Deserialize)]
struct TitleOnly {
    title: String,
}

/// 日記ファイルの中身からタイトル、ひとこと、気分を拾う。
pub fn parse_post(date: DateKey, content: &str) -> Option<PostSummary> {
    let (front, body) = split_front_matter(content)?;
    let title = toml::from_str::<TitleOnly>(front).ok()?.title;

    let opening = body
        .lines()
        .find_map(|line| line.strip_prefix(OPENING_PREFIX))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let mood = body
        .lines()
        .find_map(|line| line.strip_prefix(MOOD_PREFIX))
        .and_then(|rest| rest.split('/').next())
        .and_then(|n| n.trim().parse::<u8>().ok())
        .filter(|n| *n <= 10);

    Some(PostSummary {
        date,
        title,
        opening,
        mood,
    })
}

/// 期間内の日記を日付順に集める。読めない・解釈できないファイルは飛ばす。
pub fn collect_posts(content_dir: &Path, period: &DigestPeriod) -> Vec<PostSummary> {
    period
        .days()
        .filter_map(|date| {
            let key = DateKey::from_naive(date);
            let path = post_path(content_dir, key);
            if !path.exists() {
                return None;
            }
            let summary = fs::read_to_string(&path)
                .ok()
                .and_then(|content| parse_post(key, &content));
            if summary.is_none() {
                warn!(path = ?path, "Failed to read post for digest");
            }
            summary
        })
        .collect()
}

/// 気分の平均（小数第 1 位）。記録がなければ None。
pub fn average_mood(posts: &[PostSummary]) -> Option<f64> {
    let moods: Vec<f64> = posts
        .iter()
        .filter_map(|p| p.mood.map(f64::from))
        .collect();
    if moods.is_empty() {
        return None;
    }
    let average = moods.iter().sum::<f64>() / moods.len() as f64;
    Some((average * 10.0).round() / 10.0)
}

pub fn render_digest(
    period: &DigestPeriod,
    posts: &[PostSummary],
    site: &SiteConfig,
) -> Result<String> {
    let front = FrontMatter {
        title: period.title(),
        date: local_datetime(DateKey::from_naive(period.end), site.post_hour, site.timezone)?,
        draft: site.draft,
        tags: vec!["まとめ".to_string()],
        categories: vec!["まとめ".to_string()],
        cover: None,
    };

    let mut body = String::new();
    if posts.is_empty() {
        body.push_str("この期間の日記はありません。\n");
    } else {
        body.push_str(&format!("この期間の日記は {} 件。\n\n", posts.len()));
        for post in posts {
            let key = post.date;
            body.push_str(&format!(
                "- [{}]({{{{< ref \"/posts/{:04}/{:02}/{:02}/{key}.md\" >}}}})",
                post.title,
                key.year(),
                key.month(),
                key.day()
            ));
            if let Some(mood) = post.mood {
                body.push_str(&format!(" 気分 {mood}/10"));
            }
            if let Some(opening) = &post.opening {
                body.push_str(&format!("：{opening}"));
            }
            body.push('\n');
        }
    }
    match average_mood(posts) {
        Some(avg) => body.push_str(&format!("\n平均気分: {avg:.1}/10\n")),
        None => body.push_str("\n平均気分: -\n"),
    }

    Ok(format!("{}\n{}", front.render()?, body))
}

/// 今日が対象日のまとめを書き出す。既にあるものは作り直さない。
pub fn write_due_digests(
    site: &SiteConfig,
    schedule: &SummarySchedule,
    today: NaiveDate,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for period in schedule.due(today) {
        let path = period.path(&site.content_dir);
        if path.exists() {
            info!(path = ?path, "Digest already exists, skipping");
            continue;
        }
        let posts = collect_posts(&site.content_dir, &period);
        let content = render_digest(&period, &posts, site)
            .with_context(|| format!("Failed to render digest {}", period.title()))?;
        write_file(&path, &content)?;
        info!(path = ?path, posts = posts.len(), "Digest written");
        written.push(path);
    }
    Ok(written)
}
