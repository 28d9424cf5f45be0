//! オフライン日記の文例。平日用と休日用に分けている。

pub(crate) const QUIPS_WORKDAY: &[&str] = &[
    "在宅だとコーヒーの消費量が指数関数。",
    "締切は敵じゃない、味方にすると強い。",
    "靴下が左右で違っても、オンライン会議は気づかない。",
    "財布の現金、なぜか消える手品。",
    "カメラオフの会議で、寝ぐせは無罪放免。",
];

pub(crate) const QUIPS_DAY_OFF: &[&str] = &[
    "子の寝落ち＝親の勝利。ただし親も一緒に寝落ちがオチ。",
    "休みの日ほど早起きしてしまう謎。",
    "家族全員が家にいると、冷蔵庫の扉が休まらない。",
    "昼寝は最高の節約レジャー。",
    "休日の洗濯機は、朝から三回転。",
];

pub(crate) const WORK_WORKDAY: &[&str] = &[
    "在宅で会議多め。常駐先の証券会社の定例で、仕様の確認が三往復した。小さく決めて前へ進めるしかない。チャットの返事を待つ間に、溜まっていた雑務を片付けた。",
    "午前中はテスト結果の取りまとめ。午後は急な問い合わせ対応で予定が崩れたけど、優先順位を付け直して何とか定時に収めた。リモートだと相談のタイミングが難しい。",
    "朝イチのスタンドアップで、今週のタスクを整理。地味な手順書の更新が思ったより時間を食ったが、誰かの明日を楽にする仕事だと思えば悪くない。",
    "リリース前の確認作業で一日が終わった。画面共有越しに同じ箇所を三人で見つめる時間、妙な連帯感がある。",
];

pub(crate) const WORK_DAY_OFF: &[&str] = &[
    "今日は本業は休み。頭の片隅で来週の段取りだけ考えて、パソコンは開かずに我慢した。",
    "休みなのにチャットの通知が気になって一度だけ覗いた。何もなかった。覗かなければよかった。",
    "仕事は休み。平日の自分に、休んだ分だけ優しくしてもらう予定。",
];

pub(crate) const WORK_SIDE_JOB_DAY: &[&str] = &[
    "今日は日雇いのオフィス移転バイト。段ボールと台車で一日が終わった。腰にくるけど、身体を動かす仕事は頭がすっきりする。",
    "朝から日雇いのオフィス移転作業。キャビネットの重さに年齢を感じつつ、現場のリーダーの段取りの良さに感心した。",
];

pub(crate) const WORK_LEARNINGS: &[&str] = &[
    "期限と制約は味方。決めるべきことを先に決めると、残りは自然と片付く。",
    "わからないことは早めに聞く。自分の一時間より、相手の五分の方が安い。",
    "手順書は未来の自分への手紙。",
    "完璧より、まず出して直す。",
];

pub(crate) const MONEY_WORKDAY: &[&str] = &[
    "日用品や食費。買う日を決めて迷いを減らす作戦は、今のところ続いている。さっこの新しいバッグの話は、聞かなかったことにした。",
    "教育費の見通しを計算してみて、静かに電卓を置いた。聖太郎の受験費用、積み立てだけでは足りない。",
    "昼ごはんを家の残り物で済ませて、小さく節約。塵も積もればと信じたい。",
    "週末の日雇いのバイト代をどこに回すか考える。まずは電気代、次に子どもたちの部活費。",
];

pub(crate) const MONEY_DAY_OFF: &[&str] = &[
    "週末のまとめ買い。ポイント倍デーを狙ってスーパーへ。カゴの中身が想定より一品ずつ多いのは家族の仕業。",
    "日雇いのバイト代が入ったので、家計簿アプリに入力。使い道はもう決まっている。決まっていないことにしたい。",
    "家族で外食するか迷って、結局ホットプレートで焼きそば。安くて楽しい、は正義。",
    "さっこが通販で何か頼んでいた。箱の大きさから金額を推理するのはやめた。",
];

pub(crate) const MONEY_TIPS: &[&str] = &[
    "ポイントデーにまとめ買い。",
    "固定費を一つ見直すと、毎月の自分が助かる。",
    "買う前に一晩寝かせる。",
    "現金は封筒で分けると見える化できる。",
];

pub(crate) const PARENTING_WORKDAY: &[&str] = &[
    "聖太郎は模試の結果を見せてくれなかった。見せない理由はだいたい想像がつく。夕飯のとき、志望校の話をそれとなく振ってみたら、少しだけ本音が聞けた。",
    "蓮子は吹奏楽部の練習で遅くなった。帰ってきてからもあんさんぶるスターズの話が止まらない。楽しそうで何より。",
    "連次郎丸は今日も学校を休んだ。Robloxで作ったという街を見せてくれた。道路がやけに整然としていて、変なところで感心した。",
    "聖太郎がバイト先のスーパーで値引きシールの貼り方を覚えたらしい。家計の味方が一人増えた。",
];

pub(crate) const PARENTING_DAY_OFF: &[&str] = &[
    "蓮子がファミレスのバイトから帰ってきて、まかないの話を熱弁。今度家でも作ってもらう約束をした。",
    "連次郎丸と近所を散歩。学校の話はしなかったけど、帰り道に自分から手をつないできた。",
    "聖太郎と久しぶりにゆっくり話した。受験の不安を口にできるようになったのは、一歩前進だと思う。",
    "三人そろって昼ごはん。連次郎丸の食べこぼしを蓮子が拭いて、聖太郎が黙って皿を下げた。いい兄弟だ。",
];

pub(crate) const DAD_POINTS: &[&str] = &[
    "今日は+1（宿題見守り）",
    "口を出す前に、まず最後まで聞く。",
    "怒るより、一緒に困る。",
    "成績より、顔色を見る。",
    "子どもの好きなものを、否定しない。",
];

pub(crate) const HOBBY_WORKDAY: &[&str] = &[
    "昼休みにガンダムUCエンゲージのデイリーだけ消化。ガチャは我慢した。えらい。",
    "寝る前にLINEマンガの無料話を一話だけ。一話で済んだ試しはない。",
    "ピッコマの待てば無料が溜まっていたので、布団の中で一気読み。",
    "作業用BGMに昔のアニソンを流したら、仕事より口ずさむ方に集中してしまった。",
];

pub(crate) const HOBBY_DAY_OFF: &[&str] = &[
    "ガンダムUCエンゲージのイベントを少し進めた。連次郎丸が横から覗いてきて、機体の名前を全部覚えていた。",
    "休みなのでLINEマンガとピッコマをはしご。無料話だけで満足できる大人になった。",
    "昼寝前に漫画を三話。起きたら内容を忘れていたので、もう一度読んだ。",
    "録りためたアニメを一話だけ見た。家族の予定に合わせると、趣味は細切れになる。",
];

pub(crate) const THANKS: &[&str] = &[
    "さっこが温かいお茶を淹れてくれた。",
    "子どもたちが元気に帰ってきてくれた。",
    "会議が一本キャンセルになった。",
    "天気がもってくれた。",
    "家族が今日も無事に一日を終えられた。",
];

pub(crate) const TOMORROW_WORKDAY: &[&str] = &[
    "朝イチでタスクを三つに絞る。",
    "昼休みに五分だけ散歩する。",
    "聖太郎に声をかけるタイミングを作る。",
    "家計簿アプリを開く。開くだけでもいい。",
];

pub(crate) const TOMORROW_DAY_OFF: &[&str] = &[
    "早めに寝て、来週に備える。",
    "洗濯物を朝のうちに片付ける。",
    "連次郎丸とRobloxを一緒にやってみる。",
    "一週間の予定を家族で共有する。",
];

pub(crate) const TREND_TEMPLATES: &[&str] = &[
    "ニュースで{topic}の話題。うちには関係ないと思っていたら、だいたい関係ある。",
    "{topic}がネットで話題らしい。家族に聞いたら、父だけ知らなかった。",
    "{topic}を横目に、今日も平常運転。",
];
