//! Hugo 用の日記ファイル（TOML front matter + Markdown）を組み立てて書き出す。

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context as _, Result};
use chrono::TimeZone;
use chrono_tz::Tz;
use ponjiro_core::{DateKey, DayInfo, Diary, Section, post_tags, section_order};
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+").unwrap());

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[0-9][0-9\-\s]{8,}[0-9]").unwrap());

/// メールアドレスや電話番号らしき文字列を伏せ字にする。
pub fn mask_privacy(text: &str) -> String {
    let masked = EMAIL.replace_all(text, "***@***");
    PHONE.replace_all(&masked, "***-****-****").into_owned()
}

/// `content/posts/YYYY/MM/DD`
pub fn post_dir(content_dir: &Path, key: DateKey) -> PathBuf {
    content_dir
        .join("posts")
        .join(format!("{:04}", key.year()))
        .join(format!("{:02}", key.month()))
        .join(format!("{:02}", key.day()))
}

/// `content/posts/YYYY/MM/DD/YYYY-MM-DD.md`
pub fn post_path(content_dir: &Path, key: DateKey) -> PathBuf {
    post_dir(content_dir, key).join(format!("{key}.md"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cover {
    pub image: String,
    pub alt: String,
    pub relative: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: toml::value::Datetime,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,
}

impl FrontMatter {
    /// 日記の front matter を作る。`cover` は同じディレクトリに置いた画像のファイル名。
    pub fn for_post(
        day: &DayInfo,
        diary: &Diary,
        cover: Option<&str>,
        draft: bool,
        hour: u32,
        zone: Tz,
    ) -> Result<Self> {
        Ok(Self {
            title: format!("{} 日記", day.date_key),
            date: local_datetime(day.date_key, hour, zone)?,
            draft,
            tags: post_tags(day),
            categories: vec!["日常".to_string()],
            cover: cover.map(|image| Cover {
                image: image.to_string(),
                alt: mask_privacy(&diary.quip),
                relative: true,
            }),
        })
    }

    /// `+++` で囲んだ TOML を返す。
    pub fn render(&self) -> Result<String> {
        let toml = toml::to_string(self).context("Failed to serialize front matter")?;
        Ok(format!("+++\n{}+++\n", ensure_trailing_newline(toml)))
    }
}

fn ensure_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

/// その日の指定時刻を、タイムゾーンのオフセット付きの TOML 日時にする。
pub fn local_datetime(key: DateKey, hour: u32, zone: Tz) -> Result<toml::value::Datetime> {
    let naive = key
        .date()
        .and_hms_opt(hour, 0, 0)
        .with_context(|| format!("Invalid post hour: {hour}"))?;
    let local = zone
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("{naive} does not exist in {zone}"))?;
    local
        .format("%Y-%m-%dT%H:%M:%S%:z")
        .to_string()
        .parse()
        .context("Failed to build front matter date")
}

/// 本文（front matter を除く）を組み立てる。各欄は伏せ字処理してから埋め込む。
pub fn render_body(day: &DayInfo, diary: &Diary) -> String {
    let mut body = format!("今日のひとこと: {}\n", mask_privacy(&diary.quip));

    for section in section_order(day) {
        body.push_str(&format!("\n## {}\n\n", section.heading_jp()));
        let (text, note) = match section {
            Section::Work => (&diary.work, Some(("learn", &diary.work_learning))),
            Section::Money => (&diary.money, Some(("tip", &diary.money_tip))),
            Section::Parenting => (&diary.parenting, Some(("dadpt", &diary.dad_point))),
            Section::Hobby => (&diary.hobby, None),
        };
        body.push_str(&mask_privacy(text));
        body.push('\n');
        if let Some((name, note)) = note {
            body.push_str(&format!(
                "\n{{{{< {name} >}}}}{}{{{{< /{name} >}}}}\n",
                mask_privacy(note)
            ));
        }
    }

    body.push_str(&format!("\n## 今日の話題\n\n{}\n", mask_privacy(&diary.trend)));
    body.push_str(&format!(
        "\n## 気分・感謝・明日の一手\n\n- 気分: {}/10\n- 感謝: {}\n- 明日の一手: {}\n",
        diary.mood,
        mask_privacy(&diary.thanks),
        mask_privacy(&diary.tomorrow)
    ));
    body
}

/// 投稿ファイルの中身全体。
pub fn render_post(front_matter: &FrontMatter, day: &DayInfo, diary: &Diary) -> Result<String> {
    Ok(format!(
        "{}\n{}",
        front_matter.render()?,
        render_body(day, diary)
    ))
}

/// 親ディレクトリを作ってから書き出す。
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// `+++` で囲まれた front matter と本文に分ける。
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("+++")?.trim_start_matches(['\r', '\n']);
    let end = rest.find("\n+++")?;
    let front = &rest[..end + 1];
    let body = rest[end + 4..].trim_start_matches(['\r', '\n']);
    Some((front, body))
}
