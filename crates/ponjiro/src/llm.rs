//! OpenAI Chat Completions で日記の各欄を書き直す。
//!
//! 失敗してもオフライン日記がそのまま残るので、ここでのエラーは警告に留める。

use std::env;

use anyhow::{Context as _, Result, bail};
use ponjiro_core::{AvoidOptions, DayInfo, Diary, SideJobPlan};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{config::LlmConfig, version::user_agent};

const PERSONA: &str = "\
あなたは40代の会社員「ぽん次郎」。SES勤務で証券会社に常駐しているがフルリモート。
妻はさっこ（専業主婦で、好きなものにお金を使いがち）。家計管理はぽん次郎の担当。
子どもは長男・聖太郎（高3・受験生、スーパーでアルバイト）、長女・蓮子（高1・吹奏楽部、ファミレスでアルバイト）、次男・連次郎丸（小5・不登校気味でRobloxに夢中）。
趣味はスマホゲーム「機動戦士ガンダムUCエンゲージ」と、寝る前にLINEマンガやピッコマの無料話を読むこと。
本業だけでは苦しいので、毎週土曜か日曜のどちらかで日雇いのオフィス移転バイトをしている。
文体は一人称「オレ」の徒然な随筆風。庶民的でユーモラス、弱音もこぼすが最後は前向きに落とす。
固有名詞や正確な地名はぼかす。";

const SCHEMA: &str = r#"{
  "quip": "今日のひとこと。50〜80字。天気や体調、日雇い予定を絡める。",
  "work": "仕事。350〜450字。",
  "work_learning": "仕事からの学び。150〜250字。",
  "money": "お金。350〜450字。家計、教育費、節約、バイト代の使い道など。",
  "money_tip": "お金のミニTips。100〜200字。",
  "parenting": "子育て。350〜450字。",
  "dad_points": "父親として意識したいこと。100〜200字。",
  "hobby": "趣味。300〜400字。",
  "mood": "気分を 0〜10 の整数で。",
  "thanks": "感謝。100〜200字。",
  "tomorrow": "明日の一手。100〜200字。",
  "trend": "季節の話題やニュースへのひとこと。80〜150字。"
}"#;

const USER_MESSAGE: &str = "上記 JSON schema どおりに JSON だけ返してください。";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat Completions のクライアント。
pub struct LlmClient {
    http_client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(config: &LlmConfig, model: String, api_key: String) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent())
            .build()
            .context("Failed to create HTTP client for LLM")?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            model,
            api_key,
        })
    }

    /// システムプロンプトを送り、返ってきた本文（JSON 文字列）を返す。
    pub async fn complete(&self, system: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: USER_MESSAGE,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("HTTP status: {status}: {text}");
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .context("Chat completion returned no content")
    }
}

/// その日の情報を埋め込んだシステムプロンプトを作る。
pub fn build_system_prompt(day: &DayInfo, side_job: &SideJobPlan, avoid: &AvoidOptions) -> String {
    let mut prompt = String::from(PERSONA);
    prompt.push_str("\n\n今日の情報:\n");

    prompt.push_str(&format!(
        "- 日付: {}（{} / {}）\n",
        day.date_key,
        day.weekday.label_jp(),
        day.weekday.label_en()
    ));
    prompt.push_str(&format!("- 日の種類: {}\n", day.day_kind.label_jp()));
    if let Some(name) = day.holiday_name {
        prompt.push_str(&format!("- 祝日: {name}\n"));
    }
    prompt.push_str(&format!(
        "- 季節: {}（{}）\n",
        day.season.label,
        day.season.cues.join("、")
    ));
    if let Some(event) = day.event {
        prompt.push_str(&format!(
            "- 行事: {}（本文のどこかで必ず「{}」に触れる）\n",
            event.name_jp,
            event.keywords.join("」か「")
        ));
    }
    prompt.push_str(&format!("- 今日の焦点: {}\n", day.focus));
    prompt.push_str(&format!("- トーン: {}\n", day.tone));
    prompt.push_str(&format!(
        "- 学校行事の有無: {} / 日雇い予定日: {} / 今日が日雇い当日か: {}\n",
        side_job.school_event_label(),
        side_job.planned_day_label(),
        side_job.is_today_label()
    ));

    let mut hints = Vec::new();
    if avoid.avoid_game_streak {
        hints.push("最近ゲームの話が続いているので、趣味欄はゲーム以外を中心にする。".to_string());
    }
    if avoid.avoid_side_job_streak {
        hints.push("最近日雇いバイトの話が続いているので、お金の欄では控えめにする。".to_string());
    }
    if let Some(child) = avoid.avoid_child {
        hints.push(format!(
            "前回は{}の話だったので、子育て欄は別の子を中心にする。",
            child.name_jp()
        ));
    }
    if !hints.is_empty() {
        prompt.push_str("\n書き分けの注意:\n");
        for hint in hints {
            prompt.push_str(&format!("- {hint}\n"));
        }
    }

    prompt.push_str("\nHugoブログ用に、以下のJSON schemaで出力する。\n");
    prompt.push_str(SCHEMA);
    prompt.push_str("\nJSON だけを出力する。");
    prompt
}

/// LLM の返答で日記を上書きする。上書きした欄の数を返す。
///
/// 空文字・null・false の欄は元の値を残す。JSON として読めなければ何も変えずにエラーを返す。
pub fn apply_llm_response(diary: &mut Diary, content: &str) -> Result<usize> {
    let value: Value = serde_json::from_str(content).context("LLM response is not valid JSON")?;
    let Value::Object(fields) = value else {
        bail!("LLM response is not a JSON object");
    };

    let mut applied = 0;
    for (key, slot) in [
        ("quip", &mut diary.quip),
        ("work", &mut diary.work),
        ("work_learning", &mut diary.work_learning),
        ("money", &mut diary.money),
        ("money_tip", &mut diary.money_tip),
        ("parenting", &mut diary.parenting),
        ("dad_points", &mut diary.dad_point),
        ("hobby", &mut diary.hobby),
        ("thanks", &mut diary.thanks),
        ("tomorrow", &mut diary.tomorrow),
        ("trend", &mut diary.trend),
    ] {
        if let Some(text) = fields.get(key).and_then(text_field) {
            *slot = text;
            applied += 1;
        }
    }
    if let Some(mood) = fields.get("mood").and_then(mood_field) {
        diary.mood = mood;
        applied += 1;
    }

    Ok(applied)
}

fn text_field(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// 数値または数値の文字列を 0〜10 に収める。数値の 0 は空欄と同じ扱い。
fn mood_field(value: &Value) -> Option<u8> {
    let n = match value {
        Value::Number(n) => n.as_f64().filter(|n| *n != 0.0)?,
        Value::String(s) => s.split('/').next()?.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Some(n.round().clamp(0.0, 10.0) as u8)
}

/// API キーがあれば LLM で日記を書き直す。失敗したらオフライン日記のまま。
pub async fn enrich(
    config: &LlmConfig,
    day: &DayInfo,
    side_job: &SideJobPlan,
    avoid: &AvoidOptions,
    diary: &mut Diary,
) {
    let Some(api_key) = env::var("OPENAI_API_KEY").ok().filter(|k| !k.trim().is_empty()) else {
        warn!("OPENAI_API_KEY is not set, using offline diary");
        return;
    };
    let model = env::var("OPENAI_MODEL")
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| config.model.clone());

    match enrich_inner(config, model, api_key, day, side_job, avoid, diary).await {
        Ok(applied) => info!(fields = applied, "Diary generated by LLM"),
        Err(e) => warn!(error = %e, "LLM generation failed, using offline diary"),
    }
}

async fn enrich_inner(
    config: &LlmConfig,
    model: String,
    api_key: String,
    day: &DayInfo,
    side_job: &SideJobPlan,
    avoid: &AvoidOptions,
    diary: &mut Diary,
) -> Result<usize> {
    let client = LlmClient::new(config, model, api_key)?;
    let system = build_system_prompt(day, side_job, avoid);
    debug!(chars = system.chars().count(), model = %client.model, "Requesting chat completion");
    let content = client.complete(&system).await?;
    debug!(chars = content.chars().count(), "Chat completion received");
    apply_llm_response(diary, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ponjiro_core::{
        Child, DateKey, HolidayCalendar, SeedPurpose, compose_offline_diary, plan_side_job,
        resolve_day_info,
    };

    fn sample(y: i32, m: u32, d: u32) -> (DayInfo, SideJobPlan, Diary) {
        let key = DateKey::new(y, m, d).unwrap();
        let info = resolve_day_info(key, &HolidayCalendar::new());
        let plan = plan_side_job(&info, &mut key.rng(SeedPurpose::SideJob));
        let diary = compose_offline_diary(&info, &plan, &AvoidOptions::default());
        (info, plan, diary)
    }

    #[test]
    fn test_prompt_embeds_day_facts() {
        let (info, plan, _) = sample(2024, 1, 8);
        let prompt = build_system_prompt(&info, &plan, &AvoidOptions::default());
        assert!(prompt.contains("2024-01-08（月曜日）"));
        assert!(prompt.contains("- 祝日: 成人の日"));
        assert!(prompt.contains("- 季節: 冬"));
        assert!(prompt.contains(info.focus));
        assert!(prompt.contains("日雇い予定日: "));
        assert!(!prompt.contains("書き分けの注意"));
        assert!(prompt.contains(r#""dad_points""#));
    }

    #[test]
    fn test_prompt_mentions_event_and_hints() {
        let (info, plan, _) = sample(2024, 12, 25);
        let avoid = AvoidOptions {
            avoid_game_streak: true,
            avoid_side_job_streak: false,
            avoid_child: Some(Child::Seitaro),
        };
        let prompt = build_system_prompt(&info, &plan, &avoid);
        assert!(prompt.contains("- 行事: クリスマス"));
        assert!(prompt.contains("書き分けの注意"));
        assert!(prompt.contains("ゲーム以外"));
        assert!(prompt.contains("前回は聖太郎の話"));
        assert!(!prompt.contains("日雇いバイトの話が続いている"));
    }

    #[test]
    fn test_apply_partial_response() {
        let (_, _, mut diary) = sample(2024, 1, 9);
        let original = diary.clone();
        let content = r#"{
            "quip": "  雨。  ",
            "work": "",
            "money": null,
            "hobby": false,
            "dad_points": "聞く。",
            "trend": 0,
            "mood": "12",
            "unknown": "ignored"
        }"#;

        let applied = apply_llm_response(&mut diary, content).unwrap();
        assert_eq!(applied, 3);
        assert_eq!(diary.quip, "雨。");
        assert_eq!(diary.dad_point, "聞く。");
        assert_eq!(diary.mood, 10);
        assert_eq!(diary.work, original.work);
        assert_eq!(diary.money, original.money);
        assert_eq!(diary.hobby, original.hobby);
        assert_eq!(diary.trend, original.trend);
    }

    #[test]
    fn test_zero_mood_keeps_offline_value() {
        let (_, _, mut diary) = sample(2024, 1, 9);
        let offline = diary.mood;

        let applied = apply_llm_response(&mut diary, r#"{"mood": 0}"#).unwrap();
        assert_eq!(applied, 0);
        assert_eq!(diary.mood, offline);
        assert!((3..=10).contains(&diary.mood));
    }

    #[test]
    fn test_prompt_carries_both_weekday_labels() {
        let (info, plan, _) = sample(2024, 1, 8);
        let prompt = build_system_prompt(&info, &plan, &AvoidOptions::default());
        assert!(prompt.contains("- 日付: 2024-01-08（月曜日 / Monday）"));
        assert!(prompt.contains("- 祝日: 成人の日"));
    }

    #[test]
    fn test_mood_forms() {
        assert_eq!(mood_field(&serde_json::json!(7)), Some(7));
        assert_eq!(mood_field(&serde_json::json!(6.6)), Some(7));
        assert_eq!(mood_field(&serde_json::json!(-3)), Some(0));
        assert_eq!(mood_field(&serde_json::json!("8/10")), Some(8));
        assert_eq!(mood_field(&serde_json::json!("よい")), None);
        assert_eq!(mood_field(&serde_json::json!(null)), None);
        assert_eq!(mood_field(&serde_json::json!(0)), None);
        assert_eq!(mood_field(&serde_json::json!(0.0)), None);
    }

    #[test]
    fn test_malformed_response_keeps_offline_diary() {
        let (_, _, mut diary) = sample(2024, 1, 9);
        let original = diary.clone();
        assert!(apply_llm_response(&mut diary, "ごめんなさい").is_err());
        assert!(apply_llm_response(&mut diary, r#"["quip"]"#).is_err());
        assert_eq!(diary, original);
    }

    #[test]
    fn test_request_shape() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "system",
                content: "x",
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "system");
    }
}
