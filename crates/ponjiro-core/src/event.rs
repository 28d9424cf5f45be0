//! 特別な日（年末年始・クリスマス・母の日など）の判定とプロファイル。

use chrono::{Datelike, NaiveDate, Weekday};

use crate::holiday::{autumnal_equinox_day, nth_weekday, vernal_equinox_day};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKey {
    YearEnd,
    NewYearsEve,
    NewYearDay,
    ChristmasEve,
    Christmas,
    Valentine,
    Halloween,
    MothersDay,
    FathersDay,
    VernalEquinox,
    AutumnalEquinox,
}

/// イベントごとの語彙。`keywords` は本文中での言及確認に使う。
#[derive(Debug, PartialEq, Eq)]
pub struct EventProfile {
    pub key: EventKey,
    pub name_jp: &'static str,
    pub tags: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub focus_candidates: &'static [&'static str],
    pub quip_extras: &'static [&'static str],
    pub parenting_extras: &'static [&'static str],
    pub money_extras: &'static [&'static str],
    pub hobby_extras: &'static [&'static str],
    pub trend_topics: &'static [&'static str],
    pub pexels_keywords: &'static [&'static str],
}

/// 判定ルール。先に並んでいるほど具体的で、最初に一致したものだけを採用する。
const EVENT_RULES: &[(EventKey, fn(NaiveDate) -> bool)] = &[
    (EventKey::NewYearsEve, |d: NaiveDate| md(d) == (12, 31)),
    (EventKey::YearEnd, |d: NaiveDate| matches!(md(d), (12, 29) | (12, 30))),
    (EventKey::NewYearDay, |d: NaiveDate| matches!(md(d), (1, 1..=3))),
    (EventKey::ChristmasEve, |d: NaiveDate| md(d) == (12, 24)),
    (EventKey::Christmas, |d: NaiveDate| md(d) == (12, 25)),
    (EventKey::Valentine, |d: NaiveDate| md(d) == (2, 14)),
    (EventKey::Halloween, |d: NaiveDate| md(d) == (10, 31)),
    (EventKey::MothersDay, |d: NaiveDate| {
        nth_weekday(d.year(), 5, Weekday::Sun, 2) == Some(d)
    }),
    (EventKey::FathersDay, |d: NaiveDate| {
        nth_weekday(d.year(), 6, Weekday::Sun, 3) == Some(d)
    }),
    (EventKey::VernalEquinox, |d: NaiveDate| {
        d.month() == 3 && i64::from(d.day()) == vernal_equinox_day(d.year())
    }),
    (EventKey::AutumnalEquinox, |d: NaiveDate| {
        d.month() == 9 && i64::from(d.day()) == autumnal_equinox_day(d.year())
    }),
];

fn md(d: NaiveDate) -> (u32, u32) {
    (d.month(), d.day())
}

/// 日付に該当するイベントを 1 つだけ返す。
pub fn detect_event(date: NaiveDate) -> Option<EventKey> {
    EVENT_RULES
        .iter()
        .find(|(_, matches)| matches(date))
        .map(|(key, _)| *key)
}

/// 日付に一致するルールをすべて返す（ルール同士の重複検査用）。
#[cfg(test)]
fn matching_rules(date: NaiveDate) -> Vec<EventKey> {
    EVENT_RULES
        .iter()
        .filter(|(_, matches)| matches(date))
        .map(|(key, _)| *key)
        .collect()
}

impl EventKey {
    pub fn profile(&self) -> &'static EventProfile {
        match self {
            EventKey::YearEnd => &YEAR_END,
            EventKey::NewYearsEve => &NEW_YEARS_EVE,
            EventKey::NewYearDay => &NEW_YEAR_DAY,
            EventKey::ChristmasEve => &CHRISTMAS_EVE,
            EventKey::Christmas => &CHRISTMAS,
            EventKey::Valentine => &VALENTINE,
            EventKey::Halloween => &HALLOWEEN,
            EventKey::MothersDay => &MOTHERS_DAY,
            EventKey::FathersDay => &FATHERS_DAY,
            EventKey::VernalEquinox => &VERNAL_EQUINOX,
            EventKey::AutumnalEquinox => &AUTUMNAL_EQUINOX,
        }
    }
}

static YEAR_END: EventProfile = EventProfile {
    key: EventKey::YearEnd,
    name_jp: "年末",
    tags: &["年末"],
    keywords: &["年末", "大掃除"],
    focus_candidates: &["大掃除の段取り", "年末の買い出し"],
    quip_extras: &[
        "年末の大掃除、換気扇だけで一日終わりそう。",
        "年末は時間の流れが倍速になる気がする。",
    ],
    parenting_extras: &["子どもたちに大掃除の担当を割り振ったら、連次郎丸が真っ先に消えた。"],
    money_extras: &["年末の買い出しで、かまぼこの値段に二度見した。"],
    hobby_extras: &["年末の大掃除の合間に、ガンダムUCエンゲージのログインだけは欠かさない。"],
    trend_topics: &["年末の帰省ラッシュ", "大掃除グッズ"],
    pexels_keywords: &["year end cleaning", "japanese winter"],
};

static NEW_YEARS_EVE: EventProfile = EventProfile {
    key: EventKey::NewYearsEve,
    name_jp: "大晦日",
    tags: &["大晦日", "年末"],
    keywords: &["大晦日", "年越し"],
    focus_candidates: &["年越しそばの準備", "一年の振り返り"],
    quip_extras: &[
        "大晦日。年越しそばの海老天は一人一本までと決まった。",
        "大晦日だけは夜更かしが公認される。",
    ],
    parenting_extras: &["大晦日の紅白を見ながら、蓮子が推しの出番を待ちわびていた。"],
    money_extras: &["年越しそばとお雑煮の材料で、今月の食費が確定した。"],
    hobby_extras: &["年越しの瞬間はガンダムUCエンゲージのログボ待機。"],
    trend_topics: &["紅白歌合戦", "年越しカウントダウン"],
    pexels_keywords: &["new year's eve", "soba noodles"],
};

static NEW_YEAR_DAY: EventProfile = EventProfile {
    key: EventKey::NewYearDay,
    name_jp: "正月",
    tags: &["正月", "新年"],
    keywords: &["正月", "新年", "お年玉"],
    focus_candidates: &["初詣", "お年玉の配分", "新年の目標"],
    quip_extras: &[
        "正月太りの気配を、お雑煮の湯気でごまかす。",
        "新年の目標は、去年の目標の使い回し。",
    ],
    parenting_extras: &["お年玉の使い道を聞いたら、三人とも即答だった。計画性だけは父に似なかった。"],
    money_extras: &["お年玉の出費で、財布が新年早々スリムになった。"],
    hobby_extras: &["正月限定ガチャに吸い込まれそうになって、スマホを伏せた。"],
    trend_topics: &["初売りの福袋", "箱根駅伝"],
    pexels_keywords: &["japanese new year", "shrine visit"],
};

static CHRISTMAS_EVE: EventProfile = EventProfile {
    key: EventKey::ChristmasEve,
    name_jp: "クリスマスイブ",
    tags: &["クリスマス"],
    keywords: &["クリスマスイブ", "イブ", "クリスマス"],
    focus_candidates: &["プレゼントの受け取り", "チキンの予約"],
    quip_extras: &[
        "クリスマスイブ。サンタの財布はすでに氷河期。",
        "イブの夜、ケーキの切り分けに定規が出てきた。",
    ],
    parenting_extras: &["連次郎丸がサンタの正体を探る質問をしてきて、全力でとぼけた。"],
    money_extras: &["クリスマスのチキンとケーキで、今週の予算が吹き飛んだ。"],
    hobby_extras: &["クリスマス限定イベントの周回は、子どもが寝てから。"],
    trend_topics: &["クリスマスケーキの予約", "イルミネーション"],
    pexels_keywords: &["christmas eve", "christmas lights"],
};

static CHRISTMAS: EventProfile = EventProfile {
    key: EventKey::Christmas,
    name_jp: "クリスマス",
    tags: &["クリスマス"],
    keywords: &["クリスマス", "サンタ"],
    focus_candidates: &["プレゼントの反応", "クリスマスの後片付け"],
    quip_extras: &[
        "クリスマス当日、サンタは筋肉痛。",
        "クリスマスの朝、包装紙の山が一番の成果物。",
    ],
    parenting_extras: &["クリスマスプレゼントを開けた連次郎丸の顔で、一年分の疲れが取れた。"],
    money_extras: &["クリスマスが終わった瞬間、ケーキが半額になる現実。"],
    hobby_extras: &["クリスマスガチャは見なかったことにした。"],
    trend_topics: &["クリスマス商戦", "年末セール"],
    pexels_keywords: &["christmas morning", "gifts"],
};

static VALENTINE: EventProfile = EventProfile {
    key: EventKey::Valentine,
    name_jp: "バレンタイン",
    tags: &["バレンタイン"],
    keywords: &["バレンタイン", "チョコ"],
    focus_candidates: &["義理チョコの行方", "ホワイトデーの予算"],
    quip_extras: &[
        "バレンタイン。さっこからのチョコは、さっこが半分食べた。",
        "バレンタインのチョコは、数より気持ち。数はゼロでも気持ち。",
    ],
    parenting_extras: &["蓮子が友チョコを大量生産していて、台所が戦場だった。"],
    money_extras: &["バレンタインの材料費、父のお小遣いから出ていた疑惑。"],
    hobby_extras: &["ゲーム内のバレンタインイベントで、課金の誘惑と戦った。"],
    trend_topics: &["高級チョコの値上がり", "友チョコ文化"],
    pexels_keywords: &["valentine chocolate", "heart"],
};

static HALLOWEEN: EventProfile = EventProfile {
    key: EventKey::Halloween,
    name_jp: "ハロウィン",
    tags: &["ハロウィン"],
    keywords: &["ハロウィン", "かぼちゃ"],
    focus_candidates: &["仮装の準備", "お菓子の確保"],
    quip_extras: &[
        "ハロウィン。仮装しなくても、月末の顔はだいたいホラー。",
        "ハロウィンのかぼちゃ、結局煮物になる運命。",
    ],
    parenting_extras: &["連次郎丸がRobloxでハロウィン衣装を自慢してきた。現実の衣装は不要らしい。"],
    money_extras: &["ハロウィンのお菓子、配る分より家族が食べる分が多い。"],
    hobby_extras: &["ハロウィン限定ミッションを夜中にこっそり進めた。"],
    trend_topics: &["渋谷のハロウィン規制", "ハロウィン限定スイーツ"],
    pexels_keywords: &["halloween pumpkin", "autumn night"],
};

static MOTHERS_DAY: EventProfile = EventProfile {
    key: EventKey::MothersDay,
    name_jp: "母の日",
    tags: &["母の日"],
    keywords: &["母の日", "カーネーション"],
    focus_candidates: &["さっこへの感謝", "カーネーションの手配"],
    quip_extras: &[
        "母の日。カーネーションより、皿洗い当番の方が喜ばれた。",
        "母の日なので、今日の家事は父と子で回す。",
    ],
    parenting_extras: &["母の日のプレゼントを子どもたちと相談したら、予算の話で父が一番責められた。"],
    money_extras: &["母の日のカーネーション、意外といい値段。"],
    hobby_extras: &["母の日なのでゲームは控えめに。ログインだけ。"],
    trend_topics: &["母の日ギフト", "カーネーションの価格"],
    pexels_keywords: &["carnation", "mother's day flowers"],
};

static FATHERS_DAY: EventProfile = EventProfile {
    key: EventKey::FathersDay,
    name_jp: "父の日",
    tags: &["父の日"],
    keywords: &["父の日"],
    focus_candidates: &["父の日の過ごし方", "家族からのひとこと"],
    quip_extras: &[
        "父の日。期待はしないが、冷蔵庫のビールが一本多い気がする。",
        "父の日なのに、自分でコーヒーを淹れている。",
    ],
    parenting_extras: &["父の日に連次郎丸が肩たたき券をくれた。有効期限は今日まで。"],
    money_extras: &["父の日のプレゼント代、出どころは父の財布だった。"],
    hobby_extras: &["父の日特権で、ガンダムUCエンゲージを一時間多めに。"],
    trend_topics: &["父の日ギフト", "お父さんの休日"],
    pexels_keywords: &["father's day", "family dinner"],
};

static VERNAL_EQUINOX: EventProfile = EventProfile {
    key: EventKey::VernalEquinox,
    name_jp: "春のお彼岸",
    tags: &["お彼岸"],
    keywords: &["お彼岸", "ぼたもち", "墓参り"],
    focus_candidates: &["墓参り", "ぼたもち"],
    quip_extras: &[
        "お彼岸。暑さ寒さも彼岸まで、を信じたい。",
        "お彼岸のぼたもちは、甘さ控えめだと言い張る。",
    ],
    parenting_extras: &["お彼岸の墓参りで、子どもたちに祖父の話をした。"],
    money_extras: &["お彼岸の花とお供え物で、地味に出費。"],
    hobby_extras: &["墓参りの帰りに、車の中でこっそりデイリーを消化。"],
    trend_topics: &["春分の日の天気", "お彼岸の帰省"],
    pexels_keywords: &["spring equinox", "japanese sweets"],
};

static AUTUMNAL_EQUINOX: EventProfile = EventProfile {
    key: EventKey::AutumnalEquinox,
    name_jp: "秋のお彼岸",
    tags: &["お彼岸"],
    keywords: &["お彼岸", "おはぎ", "墓参り"],
    focus_candidates: &["墓参り", "おはぎ"],
    quip_extras: &[
        "お彼岸。おはぎとぼたもちの違いを毎年調べている。",
        "秋のお彼岸、彼岸花がきれいに咲いていた。",
    ],
    parenting_extras: &["お彼岸の墓参りに、聖太郎が珍しく自分から来た。"],
    money_extras: &["お彼岸のおはぎ、手作りは諦めて買った。"],
    hobby_extras: &["墓参りの帰り道、漫画の無料話を一気読み。"],
    trend_topics: &["秋分の日の行楽", "お彼岸の帰省"],
    pexels_keywords: &["autumn equinox", "red spider lily"],
};
