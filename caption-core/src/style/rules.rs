//! 文体规则表
//!
//! 句末形式对照表、敬语动词对照表、正式度接续词表，以及文体标记

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::style::config::SpeechStyle;

/// 句末形式之后允许出现的字符
const ENDING_BOUNDARY: &str = r"[。！？!?、，,」』）)\s]|ね|よ|$";

/// 匹配位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// 词尾：后面必须是句末标点 / 终助词 / 文本结尾
    Ending,
    /// 句首或逗号之后
    Leading,
    /// 任意位置
    Anywhere,
}

/// 一张已编译的替换表
///
/// 所有键合并为一个正则，按长度降序排列，一次扫描完成替换，不会连锁替换。
pub struct RewriteTable {
    matcher: Option<Regex>,
    map: HashMap<&'static str, &'static str>,
    anchor: Anchor,
}

impl RewriteTable {
    pub fn new(pairs: impl IntoIterator<Item = (&'static str, &'static str)>, anchor: Anchor) -> Self {
        let mut map = HashMap::new();
        let mut keys: Vec<&'static str> = Vec::new();
        for (from, to) in pairs {
            if from.is_empty() || from == to || map.contains_key(from) {
                continue;
            }
            map.insert(from, to);
            keys.push(from);
        }
        keys.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));

        let matcher = if keys.is_empty() {
            None
        } else {
            let alternation = keys.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
            let pattern = match anchor {
                Anchor::Ending => format!("({})({})", alternation, ENDING_BOUNDARY),
                Anchor::Leading => format!(r"(^|[、，,\s])({})", alternation),
                Anchor::Anywhere => format!("({})", alternation),
            };
            match Regex::new(&pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::error!("文体规则编译失败: {}", e);
                    None
                }
            }
        };

        Self { matcher, map, anchor }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(text))
    }

    pub fn rewrite(&self, text: &str) -> String {
        self.rewrite_at(text, true)
    }

    /// `at_sentence_start` 为 false 时，`Leading` 表不匹配文本开头
    pub fn rewrite_at(&self, text: &str, at_sentence_start: bool) -> String {
        let Some(re) = &self.matcher else {
            return text.to_string();
        };

        re.replace_all(text, |caps: &Captures<'_>| {
            let lookup = |key: &str| self.map.get(key).copied().unwrap_or_default();
            match self.anchor {
                Anchor::Ending => format!("{}{}", lookup(&caps[1]), &caps[2]),
                Anchor::Leading if caps[1].is_empty() && !at_sentence_start => caps[0].to_string(),
                Anchor::Leading => format!("{}{}", &caps[1], lookup(&caps[2])),
                Anchor::Anywhere => lookup(&caps[1]).to_string(),
            }
        })
        .into_owned()
    }
}

// ---------------------------------------------------------------------------
// 常体 ↔ 敬体
// ---------------------------------------------------------------------------

const PLAIN_TO_POLITE: &[(&str, &str)] = &[
    ("ではなかった", "ではありませんでした"),
    ("ではない", "ではありません"),
    ("じゃなかった", "じゃありませんでした"),
    ("じゃない", "じゃありません"),
    ("であった", "でした"),
    ("である", "です"),
    ("だった", "でした"),
    ("だろう", "でしょう"),
    ("だ", "です"),
    ("しなかった", "しませんでした"),
    ("しない", "しません"),
    ("した", "しました"),
    ("する", "します"),
    ("ていなかった", "ていませんでした"),
    ("ていない", "ていません"),
    ("ていた", "ていました"),
    ("ている", "ています"),
    ("でいた", "でいました"),
    ("でいる", "でいます"),
    ("あった", "ありました"),
    ("ある", "あります"),
    ("なった", "なりました"),
    ("なる", "なります"),
    ("できた", "できました"),
    ("できる", "できます"),
    ("思った", "思いました"),
    ("思う", "思います"),
    ("言った", "言いました"),
    ("言う", "言います"),
    ("行った", "行きました"),
    ("行く", "行きます"),
    ("来た", "来ました"),
    ("来る", "来ます"),
    ("見た", "見ました"),
    ("見る", "見ます"),
    ("食べた", "食べました"),
    ("食べる", "食べます"),
    ("わかった", "わかりました"),
    ("わかる", "わかります"),
];

const POLITE_TO_PLAIN: &[(&str, &str)] = &[
    ("ではありませんでした", "ではなかった"),
    ("ではありません", "ではない"),
    ("じゃありませんでした", "じゃなかった"),
    ("じゃありません", "じゃない"),
    ("でした", "だった"),
    ("でしょう", "だろう"),
    ("いです", "い"),
    ("です", "だ"),
    ("いたしませんでした", "しなかった"),
    ("いたしません", "しない"),
    ("いたしました", "した"),
    ("いたします", "する"),
    ("しませんでした", "しなかった"),
    ("しません", "しない"),
    ("しました", "した"),
    ("します", "する"),
    ("ていませんでした", "ていなかった"),
    ("ていません", "ていない"),
    ("ていました", "ていた"),
    ("ています", "ている"),
    ("でいました", "でいた"),
    ("でいます", "でいる"),
    ("ありませんでした", "なかった"),
    ("ありません", "ない"),
    ("ありました", "あった"),
    ("あります", "ある"),
    ("なりました", "なった"),
    ("なります", "なる"),
    ("できました", "できた"),
    ("できます", "できる"),
    ("思いました", "思った"),
    ("思います", "思う"),
    ("言いました", "言った"),
    ("言います", "言う"),
    ("行きました", "行った"),
    ("行きます", "行く"),
    ("来ました", "来た"),
    ("来ます", "来る"),
    ("見ました", "見た"),
    ("見ます", "見る"),
    ("食べました", "食べた"),
    ("食べます", "食べる"),
    ("わかりました", "わかった"),
    ("わかります", "わかる"),
];

pub static PLAIN_TO_POLITE_TABLE: LazyLock<RewriteTable> =
    LazyLock::new(|| RewriteTable::new(PLAIN_TO_POLITE.iter().copied(), Anchor::Ending));

pub static POLITE_TO_PLAIN_TABLE: LazyLock<RewriteTable> =
    LazyLock::new(|| RewriteTable::new(POLITE_TO_PLAIN.iter().copied(), Anchor::Ending));

// ---------------------------------------------------------------------------
// 四级敬语：每行依次为 谦让 / 丁宁 / 尊敬 / 口语
// ---------------------------------------------------------------------------

const SPEECH_ROWS: &[[&str; 4]] = &[
    ["いたしません", "しません", "なさいません", "しない"],
    ["いたしました", "しました", "なさいました", "した"],
    ["いたします", "します", "なさいます", "する"],
    ["申しました", "言いました", "おっしゃいました", "言った"],
    ["申します", "言います", "おっしゃいます", "言う"],
    ["参りました", "行きました", "いらっしゃいました", "行った"],
    ["参ります", "行きます", "いらっしゃいます", "行く"],
    ["参りました", "来ました", "いらっしゃいました", "来た"],
    ["参ります", "来ます", "いらっしゃいます", "来る"],
    ["ておりました", "ていました", "ていらっしゃいました", "ていた"],
    ["ております", "ています", "ていらっしゃいます", "ている"],
    ["拝見しました", "見ました", "ご覧になりました", "見た"],
    ["拝見します", "見ます", "ご覧になります", "見る"],
    ["いただきました", "食べました", "召し上がりました", "食べた"],
    ["いただきます", "食べます", "召し上がります", "食べる"],
    ["存じております", "知っています", "ご存じです", "知っている"],
    ["存じます", "思います", "お思いになります", "思う"],
    ["伺いました", "聞きました", "お聞きになりました", "聞いた"],
    ["伺います", "聞きます", "お聞きになります", "聞く"],
    ["ございます", "あります", "おありです", "ある"],
    ["でございました", "でした", "でいらっしゃいました", "だった"],
    ["でございます", "です", "でいらっしゃいます", "だ"],
];

static SPEECH_TABLES: LazyLock<HashMap<(SpeechStyle, SpeechStyle), RewriteTable>> = LazyLock::new(|| {
    let mut tables = HashMap::new();
    for from in SpeechStyle::ALL {
        for to in SpeechStyle::ALL {
            if from == to {
                continue;
            }
            let pairs = SPEECH_ROWS
                .iter()
                .map(|row| (row[from.column()], row[to.column()]));
            tables.insert((from, to), RewriteTable::new(pairs, Anchor::Ending));
        }
    }
    tables
});

/// 取得 from → to 的敬语对照表
pub fn speech_table(from: SpeechStyle, to: SpeechStyle) -> Option<&'static RewriteTable> {
    SPEECH_TABLES.get(&(from, to))
}

// ---------------------------------------------------------------------------
// 正式度接续词表
// ---------------------------------------------------------------------------

const HIGH_FORMALITY_LEADING: &[(&str, &str)] = &[
    ("だから", "したがって"),
    ("だけど", "けれども"),
    ("でも", "しかし"),
    ("じゃあ", "では"),
];

const HIGH_FORMALITY_ANYWHERE: &[(&str, &str)] = &[
    ("ちょっと", "少々"),
    ("すごく", "非常に"),
    ("あとで", "後ほど"),
    ("さっき", "先ほど"),
    ("今日", "本日"),
];

const LOW_FORMALITY_LEADING: &[(&str, &str)] = &[
    ("したがって", "だから"),
    ("しかしながら", "でも"),
    ("しかし", "でも"),
    ("けれども", "だけど"),
];

const LOW_FORMALITY_ANYWHERE: &[(&str, &str)] = &[
    ("少々", "ちょっと"),
    ("非常に", "すごく"),
    ("後ほど", "あとで"),
    ("先ほど", "さっき"),
    ("本日", "今日"),
];

/// 正式度接续词替换（句首表 + 任意位置表）
pub struct FormalityTable {
    leading: RewriteTable,
    anywhere: RewriteTable,
}

impl FormalityTable {
    pub fn rewrite(&self, text: &str, at_sentence_start: bool) -> String {
        self.anywhere.rewrite(&self.leading.rewrite_at(text, at_sentence_start))
    }
}

pub static HIGH_FORMALITY: LazyLock<FormalityTable> = LazyLock::new(|| FormalityTable {
    leading: RewriteTable::new(HIGH_FORMALITY_LEADING.iter().copied(), Anchor::Leading),
    anywhere: RewriteTable::new(HIGH_FORMALITY_ANYWHERE.iter().copied(), Anchor::Anywhere),
});

pub static LOW_FORMALITY: LazyLock<FormalityTable> = LazyLock::new(|| FormalityTable {
    leading: RewriteTable::new(LOW_FORMALITY_LEADING.iter().copied(), Anchor::Leading),
    anywhere: RewriteTable::new(LOW_FORMALITY_ANYWHERE.iter().copied(), Anchor::Anywhere),
});

// ---------------------------------------------------------------------------
// 文体标记
// ---------------------------------------------------------------------------

fn compile_marker(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| tracing::error!("文体标记编译失败: {}", e))
        .ok()
}

/// 敬体标记（可接终助词「か」）
pub static POLITE_MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile_marker(&format!(
        "(です|ます|でした|ました|ません|でしょう|ましょう|ございます)(か|{})",
        ENDING_BOUNDARY
    ))
});

/// 常体标记
pub static PLAIN_MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile_marker(&format!(
        "(だ|である|だった|であった|だろう|ない|た|る|う|く|ぐ|す|つ|ぬ|ぶ|む|い|じゃん|よね)({})",
        ENDING_BOUNDARY
    ))
});

/// 谦让语标记（词干即可判定）
pub static HUMBLE_MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile_marker("いたし|申し|参り|おりま|存じ|拝見|伺い|ござい|いただ")
});

/// 尊敬语标记
pub static RESPECTFUL_MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile_marker("いらっしゃ|おっしゃ|なさ[いるっ]|ご覧|召し上が|ご存じ|くださ|おあり|お[^、。！？]{1,4}にな[りる]")
});

pub fn marker_matches(marker: &LazyLock<Option<Regex>>, text: &str) -> bool {
    let marker: &Option<Regex> = marker;
    marker.as_ref().is_some_and(|re| re.is_match(text))
}
