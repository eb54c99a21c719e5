//! 标点规则层
//!
//! 接续词、闭合引号、从属助词、助动词 + 逆接助词后的逗号规则

use std::sync::LazyLock;

use regex::Regex;

/// 规则种类（按应用顺序排列）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectiveKind {
    /// 句首接续词：しかし、だから、そして …
    Conjunction,
    /// 闭合引号：」『』
    ClosingQuote,
    /// 从属助词：ので、のに、けれど …
    Subordinating,
    /// 助动词 + 逆接：ですが、ましたが …
    Auxiliary,
}

/// 句首接续词（长词在前）
const CONJUNCTIONS: &[&str] = &[
    "しかしながら", "しかし", "だから", "そして", "それでも", "それで", "ところが", "ところで",
    "つまり", "ですので", "なので", "ただし", "さらに", "それに", "だけど",
];

const SUBORDINATING: &[&str] = &["けれども", "けれど", "けど", "ながらも", "ので", "のに"];

const AUXILIARY: &[&str] = &[
    "でしたが", "ましたが", "ですが", "ますが", "だが", "ましたけど", "ですけど", "ますけど",
];

/// 接续词后面的字符不能是标点或空白
const FOLLOW: &str = r"[^、，,。！？!?\s」』）)]";

/// 一条已编译的规则
pub struct ConnectiveRule {
    pub kind: ConnectiveKind,
    matcher: Regex,
    replacement: &'static str,
}

impl ConnectiveRule {
    fn compile(kind: ConnectiveKind, pattern: String, replacement: &'static str) -> Option<Self> {
        match Regex::new(&pattern) {
            Ok(matcher) => Some(Self {
                kind,
                matcher,
                replacement,
            }),
            Err(e) => {
                tracing::error!("标点规则编译失败 {:?}: {}", kind, e);
                None
            }
        }
    }

    pub fn apply(&self, text: &str) -> String {
        self.matcher.replace_all(text, self.replacement).into_owned()
    }
}

fn alternation(words: &[&str]) -> String {
    words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|")
}

static RULES: LazyLock<Vec<ConnectiveRule>> = LazyLock::new(|| {
    [
        ConnectiveRule::compile(
            ConnectiveKind::Conjunction,
            format!(r"(^|[。！？!?、\s])({})({})", alternation(CONJUNCTIONS), FOLLOW),
            "${1}${2}、${3}",
        ),
        ConnectiveRule::compile(
            ConnectiveKind::ClosingQuote,
            r"([」』])([^、，,。！？!?\s」』）)とっ])".to_string(),
            "${1}、${2}",
        ),
        ConnectiveRule::compile(
            ConnectiveKind::Subordinating,
            format!(r"({})({})", alternation(SUBORDINATING), FOLLOW),
            "${1}、${2}",
        ),
        ConnectiveRule::compile(
            ConnectiveKind::Auxiliary,
            format!(r"({})({})", alternation(AUXILIARY), FOLLOW),
            "${1}、${2}",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
});

/// 规则层
pub struct RuleLayer;

impl RuleLayer {
    /// 依次应用全部接续规则
    pub fn apply_connectives(text: &str) -> String {
        RULES.iter().fold(text.to_string(), |acc, rule| {
            let next = rule.apply(&acc);
            if next != acc {
                tracing::debug!("  ✏️ 规则 {:?} 插入逗号", rule.kind);
            }
            next
        })
    }

    pub fn rules() -> &'static [ConnectiveRule] {
        &RULES
    }
}
