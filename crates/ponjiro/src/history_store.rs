//! 過去の日記の意味タグを JSON ファイルに保存するストア。

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use ponjiro_core::{AvoidOptions, DateKey, HistoryEntry};

/// 日付順に並んだ [`HistoryEntry`] のストア。
pub struct HistoryStore {
    /// 永続化ファイルのパス
    path: PathBuf,
    /// 日付の昇順
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// ストアを読み込む。ファイルが存在しない場合は空のストアを作成する。
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut entries: Vec<HistoryEntry> = if path.exists() {
            let content = fs::read_to_string(&path).context("Failed to read history store")?;
            serde_json::from_str(&content).context("Failed to parse history store")?
        } else {
            Vec::new()
        };
        entries.sort_by_key(|e| e.date);
        Ok(Self { path, entries })
    }

    /// 空のストアを作成する。読み込みに失敗したときの作り直しに使う。
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// ストアをファイルに保存する。
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create history store directory")?;
        }
        let content = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize history store")?;
        fs::write(&self.path, content).context("Failed to write history store")?;
        Ok(())
    }

    /// 同じ日付があれば置き換え、直近 `keep` 件だけを残して保存する。
    pub fn upsert(&mut self, entry: HistoryEntry, keep: usize) -> Result<()> {
        match self.entries.binary_search_by_key(&entry.date, |e| e.date) {
            Ok(i) => self.entries[i] = entry,
            Err(i) => self.entries.insert(i, entry),
        }
        if self.entries.len() > keep {
            let excess = self.entries.len() - keep;
            self.entries.drain(..excess);
        }
        self.save()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// `today` より前の履歴から繰り返し回避のフラグを決める。
    pub fn avoid_options(&self, today: DateKey, window: usize) -> AvoidOptions {
        AvoidOptions::from_history(&self.entries, today, window)
    }
}
