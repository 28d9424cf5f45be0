//! 月ごとの季節プロファイル。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonKey {
    Winter,
    Spring,
    Rainy,
    Summer,
    Autumn,
}

/// 季節ごとの語彙。
#[derive(Debug, PartialEq, Eq)]
pub struct SeasonProfile {
    pub key: SeasonKey,
    pub label: &'static str,
    pub cues: &'static [&'static str],
    pub weather_phrases: &'static [&'static str],
    pub trend_topics: &'static [&'static str],
}

impl SeasonKey {
    /// 12〜2 月は冬、3〜5 月は春、6 月は梅雨、7〜8 月は夏、9〜11 月は秋。
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => SeasonKey::Spring,
            6 => SeasonKey::Rainy,
            7 | 8 => SeasonKey::Summer,
            9..=11 => SeasonKey::Autumn,
            _ => SeasonKey::Winter,
        }
    }

    pub fn profile(&self) -> &'static SeasonProfile {
        match self {
            SeasonKey::Winter => &WINTER,
            SeasonKey::Spring => &SPRING,
            SeasonKey::Rainy => &RAINY,
            SeasonKey::Summer => &SUMMER,
            SeasonKey::Autumn => &AUTUMN,
        }
    }
}

static WINTER: SeasonProfile = SeasonProfile {
    key: SeasonKey::Winter,
    label: "冬",
    cues: &["こたつ", "鍋", "乾燥", "白い息"],
    weather_phrases: &[
        "朝から底冷えして、布団から出るのに三分かかった。",
        "空気がカラカラで、加湿器がフル稼働。",
        "よく晴れたけど風が冷たい。",
        "窓の結露を拭くところから一日が始まった。",
    ],
    trend_topics: &["インフルエンザの流行", "電気代の値上がり", "受験シーズン", "冬のボーナスの使い道"],
};

static SPRING: SeasonProfile = SeasonProfile {
    key: SeasonKey::Spring,
    label: "春",
    cues: &["花粉", "桜", "新学期", "衣替え"],
    weather_phrases: &[
        "花粉が本気を出してきて、ティッシュの減りが早い。",
        "ぽかぽか陽気で、ベランダの洗濯物がよく乾いた。",
        "春の嵐みたいな風で、自転車がよろけた。",
        "朝晩はまだ肌寒いけど、昼は上着がいらない。",
    ],
    trend_topics: &["花見の混雑", "新生活グッズ", "花粉の飛散予報", "ゴールデンウィークの予定"],
};

static RAINY: SeasonProfile = SeasonProfile {
    key: SeasonKey::Rainy,
    label: "梅雨",
    cues: &["傘", "湿気", "部屋干し", "紫陽花"],
    weather_phrases: &[
        "一日中しとしと雨。部屋干しの匂いとの戦い。",
        "湿気で髪がまとまらない。まとめる髪も少ないけど。",
        "雨の合間に晴れ間。洗濯機を急いで回した。",
        "ジメジメして、除湿機のタンクがすぐいっぱいになる。",
    ],
    trend_topics: &["梅雨入りのニュース", "除湿機の売れ行き", "紫陽花の名所", "ボーナス商戦"],
};

static SUMMER: SeasonProfile = SeasonProfile {
    key: SeasonKey::Summer,
    label: "夏",
    cues: &["蝉", "麦茶", "エアコン", "花火"],
    weather_phrases: &[
        "朝から蝉が全開。エアコンなしでは生きられない。",
        "猛暑日。麦茶の消費量が家族全員で過去最高。",
        "夕立がきて、一瞬だけ涼しくなった。",
        "日差しが強すぎて、ベランダに出ただけで汗だく。",
    ],
    trend_topics: &["熱中症警戒アラート", "夏休みの宿題", "花火大会", "お盆の帰省ラッシュ"],
};

static AUTUMN: SeasonProfile = SeasonProfile {
    key: SeasonKey::Autumn,
    label: "秋",
    cues: &["金木犀", "さんま", "読書", "運動会"],
    weather_phrases: &[
        "金木犀の匂いがして、季節が変わったのを実感。",
        "やっと涼しくなって、窓を開けて寝られた。",
        "秋晴れ。空が高い。",
        "台風の影響で朝から風が強い。",
    ],
    trend_topics: &["さんまの値段", "紅葉の見頃", "新米の季節", "年末調整の書類"],
};
