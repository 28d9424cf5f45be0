//! 過去の日記の意味タグと、繰り返しを避けるためのフラグ。
//!
//! 書き出した Markdown を読み直すのではなく、
//! 投稿ごとに保存した [`HistoryEntry`] から判定する。

use serde::{Deserialize, Serialize};

use crate::{date_key::DateKey, offline::Diary};

/// 直近何件までを見るかの上限。
pub const MAX_WINDOW: usize = 3;

/// 同じ話題が窓の中でこの件数以上あれば避ける。
const STREAK_THRESHOLD: usize = 2;

/// 子ども。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Child {
    /// 長男・高 3
    Seitaro,
    /// 長女・高 1
    Renko,
    /// 次男・小 5
    Renjiromaru,
}

impl Child {
    pub const ALL: [Child; 3] = [Child::Seitaro, Child::Renko, Child::Renjiromaru];

    pub fn name_jp(&self) -> &'static str {
        match self {
            Child::Seitaro => "聖太郎",
            Child::Renko => "蓮子",
            Child::Renjiromaru => "連次郎丸",
        }
    }

    /// 本文中で最初に名前が出てくる子ども。
    pub fn first_mentioned(text: &str) -> Option<Child> {
        Child::ALL
            .iter()
            .filter_map(|child| text.find(child.name_jp()).map(|pos| (pos, *child)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, child)| child)
    }
}

/// 繰り返しを避けたい話題。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motif {
    /// スマホゲーム（ガンダムUCエンゲージ）
    Game,
    /// 日雇いのオフィス移転バイト
    SideJob,
}

impl Motif {
    pub const ALL: [Motif; 2] = [Motif::Game, Motif::SideJob];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Motif::Game => &["ガンダム", "UCエンゲージ"],
            Motif::SideJob => &["日雇い", "オフィス移転"],
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.keywords().iter().any(|k| text.contains(k))
    }
}

/// 1 日分の意味タグ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: DateKey,
    #[serde(default)]
    pub mentioned_child: Option<Child>,
    #[serde(default)]
    pub motifs: Vec<Motif>,
    #[serde(default)]
    pub mood: Option<u8>,
}

impl HistoryEntry {
    /// 確定した日記本文からタグを抽出する。
    pub fn from_diary(date: DateKey, diary: &Diary) -> Self {
        let motifs = Motif::ALL
            .into_iter()
            .filter(|motif| diary.texts().any(|text| motif.matches(text)))
            .collect();

        Self {
            date,
            mentioned_child: Child::first_mentioned(&diary.parenting),
            motifs,
            mood: Some(diary.mood),
        }
    }
}

/// オフライン日記の候補を絞り込むフラグ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvoidOptions {
    /// 趣味欄でゲームの話を避ける
    pub avoid_game_streak: bool,
    /// お金欄で日雇いの話を避ける
    pub avoid_side_job_streak: bool,
    /// 子育て欄で直前に取り上げた子を避ける
    pub avoid_child: Option<Child>,
}

impl AvoidOptions {
    /// 当日より前の履歴から直近 `window`（最大 3）件を見てフラグを決める。
    ///
    /// `recent` は日付の昇順で渡す。
    pub fn from_history(recent: &[HistoryEntry], today: DateKey, window: usize) -> Self {
        let window = window.min(MAX_WINDOW);
        let previous: Vec<&HistoryEntry> = recent
            .iter()
            .filter(|e| e.date < today)
            .rev()
            .take(window)
            .collect();

        let streak = |motif: Motif| {
            previous.iter().filter(|e| e.motifs.contains(&motif)).count() >= STREAK_THRESHOLD
        };

        Self {
            avoid_game_streak: streak(Motif::Game),
            avoid_side_job_streak: streak(Motif::SideJob),
            avoid_child: previous.first().and_then(|e| e.mentioned_child),
        }
    }

    pub fn avoids(&self, motif: Motif) -> bool {
        match motif {
            Motif::Game => self.avoid_game_streak,
            Motif::SideJob => self.avoid_side_job_streak,
        }
    }
}
