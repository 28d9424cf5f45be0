use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::digest::SummarySchedule;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub photo: PhotoConfig,
    #[serde(default)]
    pub digest: SummarySchedule,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Hugo の content ディレクトリ
    pub content_dir: PathBuf,
    /// 日付を決めるタイムゾーン
    #[serde_as(as = "DisplayFromStr")]
    pub timezone: Tz,
    #[serde(default)]
    pub draft: bool,
    /// front matter の `date` に入れる時刻（時）
    #[serde(default = "default_post_hour")]
    pub post_hour: u32,
}

fn default_post_hour() -> u32 {
    22
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            timezone: chrono_tz::Asia::Tokyo,
            draft: false,
            post_hour: default_post_hour(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LlmConfig {
    pub endpoint: String,
    /// 環境変数 `OPENAI_MODEL` があればそちらを優先する
    pub model: String,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhotoConfig {
    pub endpoint: String,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// 検索語が組み立てられなかったときの検索語
    pub fallback_query: String,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.pexels.com/v1/search".to_string(),
            timeout: Duration::from_secs(30),
            fallback_query: "東京 日常 家族 夕方".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// 相対パスなら content ディレクトリからの位置
    pub file: PathBuf,
    /// 繰り返し判定に使う直近の件数（最大 3）
    #[serde(default = "default_window")]
    pub window: usize,
    /// ファイルに残す件数
    #[serde(default = "default_keep")]
    pub keep: usize,
}

fn default_window() -> usize {
    3
}

fn default_keep() -> usize {
    30
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(".ponjiro-history.json"),
            window: default_window(),
            keep: default_keep(),
        }
    }
}

impl HistoryConfig {
    pub fn path(&self, content_dir: &Path) -> PathBuf {
        content_dir.join(&self.file)
    }
}

pub fn open_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
    let config: Config = toml::from_str(&content).context("Failed to parse configuration file")?;
    Ok(config)
}

pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let content =
        toml::to_string_pretty(&Config::default()).context("Failed to serialize configuration")?;
    fs::write(path.as_ref(), content).context("Failed to write configuration file")?;
    Ok(())
}
