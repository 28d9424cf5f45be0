//! Pexels から表紙画像を 1 枚取ってくる。

use std::{env, fs, path::Path};

use anyhow::{Context as _, Result, bail};
use ponjiro_core::{DayInfo, Diary};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{config::PhotoConfig, version::user_agent};

/// 記事と同じディレクトリに置く画像のファイル名。
pub const COVER_FILE_NAME: &str = "cover.jpg";

/// 検索語の最大文字数。
const MAX_QUERY_CHARS: usize = 100;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSource,
}

#[derive(Debug, Default, Deserialize)]
struct PhotoSource {
    large2x: Option<String>,
    large: Option<String>,
    landscape: Option<String>,
}

impl PhotoSource {
    fn best(self) -> Option<String> {
        self.large2x.or(self.large).or(self.landscape)
    }
}

/// Pexels のクライアント。
pub struct PhotoClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl PhotoClient {
    pub fn new(config: &PhotoConfig, api_key: String) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent())
            .build()
            .context("Failed to create HTTP client for Pexels")?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }

    /// 最初の 1 枚の画像 URL を返す。見つからなければ None。
    pub async fn search(&self, query: &str) -> Result<Option<String>> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .header("Authorization", &self.api_key)
            .query(&[
                ("per_page", "1"),
                ("orientation", "landscape"),
                ("query", query),
            ])
            .send()
            .await
            .context("HTTP request failed")?;

        if !response.status().is_success() {
            bail!("HTTP status: {}", response.status());
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .context("Failed to parse Pexels response")?;
        Ok(parsed.photos.into_iter().next().and_then(|p| p.src.best()))
    }

    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", &self.api_key)
            .send()
            .await
            .context("HTTP request failed")?;

        if !response.status().is_success() {
            bail!("HTTP status: {}", response.status());
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read image body")?;
        Ok(bytes.to_vec())
    }
}

/// 画像検索の検索語を組み立てる。
///
/// 行事のキーワード、季節、焦点、趣味・子育て・仕事の本文の順に並べて切り詰める。
pub fn photo_query(day: &DayInfo, diary: &Diary, fallback: &str) -> String {
    let event_keywords = day.event.map(|e| e.pexels_keywords).unwrap_or_default();
    let parts = event_keywords
        .iter()
        .copied()
        .chain([
            day.season.label,
            day.focus,
            diary.hobby.as_str(),
            diary.parenting.as_str(),
            diary.work.as_str(),
        ])
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut query = String::new();
    for part in parts {
        if !query.is_empty() {
            query.push(' ');
        }
        query.push_str(part);
    }
    let query: String = query.chars().take(MAX_QUERY_CHARS).collect();
    let query = query.trim();

    if query.is_empty() {
        fallback.to_string()
    } else {
        query.to_string()
    }
}

/// API キーがあれば表紙画像を `dir/cover.jpg` に保存し、ファイル名を返す。
///
/// 取得に失敗した場合は None を返す（エラーはログに記録）。
pub async fn fetch_cover(
    config: &PhotoConfig,
    day: &DayInfo,
    diary: &Diary,
    dir: &Path,
) -> Option<&'static str> {
    let Some(api_key) = env::var("PEXELS_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
    else {
        info!("PEXELS_API_KEY is not set, skipping cover image");
        return None;
    };

    let query = photo_query(day, diary, &config.fallback_query);
    match fetch_cover_inner(config, api_key, &query, dir).await {
        Ok(true) => Some(COVER_FILE_NAME),
        Ok(false) => {
            info!(query = %query, "No photo found");
            None
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch cover image");
            None
        }
    }
}

async fn fetch_cover_inner(
    config: &PhotoConfig,
    api_key: String,
    query: &str,
    dir: &Path,
) -> Result<bool> {
    let client = PhotoClient::new(config, api_key)?;
    let Some(url) = client.search(query).await? else {
        return Ok(false);
    };
    let bytes = client.download(&url).await?;
    debug!(bytes = bytes.len(), url = %url, "Cover image downloaded");

    fs::create_dir_all(dir).context("Failed to create post directory")?;
    fs::write(dir.join(COVER_FILE_NAME), bytes).context("Failed to write cover image")?;
    Ok(true)
}
