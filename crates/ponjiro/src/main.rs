mod config;
mod digest;
mod history_store;
mod llm;
mod photo;
mod post;
mod version;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use ponjiro_core::{
    DateKey, HistoryEntry, HolidayCalendar, SeedPurpose, compose_offline_diary,
    ensure_event_mention, plan_side_job, resolve_day_info,
};
use tracing::{info, warn};

use crate::{
    config::{Config, open_config, write_default_config},
    history_store::HistoryStore,
    post::FrontMatter,
    version::short_version,
};

#[derive(Parser)]
#[command(version = short_version())]
struct Args {
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[arg(long)]
    init: bool,

    /// 対象日（YYYY-MM-DD）。省略時は設定したタイムゾーンの今日
    #[arg(long)]
    date: Option<String>,

    /// LLM と画像検索を使わずにオフライン日記だけで書く
    #[arg(long)]
    offline: bool,

    /// 既存の日記を上書きする
    #[arg(long)]
    force: bool,

    /// まとめページだけを作る
    #[arg(long)]
    digest: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    if args.init {
        write_default_config(&args.config)?;
        info!(path = ?args.config, "Created default configuration");
        return Ok(());
    }

    info!(version = short_version(), "ponjiro version");

    let config = open_config(&args.config).context("Failed to load configuration")?;
    info!(content_dir = ?config.site.content_dir, timezone = %config.site.timezone, "Configuration loaded");

    let key = match &args.date {
        Some(date) => date
            .parse::<DateKey>()
            .with_context(|| format!("invalid date: {date}"))?,
        None => DateKey::from_instant(chrono::Utc::now(), &config.site.timezone),
    };

    if !args.digest {
        write_daily_post(&config, key, &args).await?;
    }

    let written = digest::write_due_digests(&config.site, &config.digest, key.date())
        .context("Failed to write digests")?;
    info!(count = written.len(), "Digests checked");

    Ok(())
}

/// 1 日分の日記を組み立てて書き出し、履歴を更新する。
async fn write_daily_post(config: &Config, key: DateKey, args: &Args) -> Result<()> {
    let content_dir = &config.site.content_dir;
    let path = post::post_path(content_dir, key);
    if path.exists() && !args.force {
        info!(path = ?path, "Post already exists, skipping");
        return Ok(());
    }

    let calendar = HolidayCalendar::new();
    let day = resolve_day_info(key, &calendar);
    info!(
        date = %key,
        kind = day.day_kind.label_jp(),
        holiday = day.holiday_name,
        event = day.event.map(|e| e.name_jp),
        focus = day.focus,
        "Day resolved"
    );

    let history_path = config.history.path(content_dir);
    let mut history = HistoryStore::load(&history_path).unwrap_or_else(|e| {
        warn!(path = ?history_path, error = %e, "Failed to load history, starting fresh");
        HistoryStore::empty(&history_path)
    });
    let avoid = history.avoid_options(key, config.history.window);

    let side_job = plan_side_job(&day, &mut key.rng(SeedPurpose::SideJob));
    let mut diary = compose_offline_diary(&day, &side_job, &avoid);

    if !args.offline {
        llm::enrich(&config.llm, &day, &side_job, &avoid, &mut diary).await;
    }
    if ensure_event_mention(&mut diary, &day) {
        info!("Event mention appended to opening remark");
    }

    let post_dir = post::post_dir(content_dir, key);
    let cover = if args.offline {
        None
    } else {
        photo::fetch_cover(&config.photo, &day, &diary, &post_dir).await
    };

    let front_matter = FrontMatter::for_post(
        &day,
        &diary,
        cover,
        config.site.draft,
        config.site.post_hour,
        config.site.timezone,
    )?;
    let content = post::render_post(&front_matter, &day, &diary)?;
    post::write_file(&path, &content)?;
    info!(path = ?path, cover = cover.is_some(), mood = diary.mood, "Post written");

    history
        .upsert(HistoryEntry::from_diary(key, &diary), config.history.keep)
        .context("Failed to update history")?;

    Ok(())
}
