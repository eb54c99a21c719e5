//! 形态素 Token 与 Token 源接口
//!
//! 形态素解析器本身由宿主提供，引擎只通过 `TokenSource` 消费其结果。

use async_trait::async_trait;

use crate::error::CaptionResult;

/// 品词（IPADIC 命名）
pub const POS_NOUN: &str = "名詞";
pub const POS_VERB: &str = "動詞";
pub const POS_ADJECTIVE: &str = "形容詞";

/// 品词细分类
pub const DETAIL_PROPER_NOUN: &str = "固有名詞";
pub const DETAIL_GENERAL: &str = "一般";
pub const DETAIL_NON_INDEPENDENT: &str = "非自立";
pub const DETAIL_PRONOUN: &str = "代名詞";
pub const DETAIL_NUMBER: &str = "数";

/// 形态素 Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 表层形
    pub surface: String,
    /// 读音（片假名）
    pub reading: String,
    /// 原形
    pub base_form: String,
    pub part_of_speech: String,
    pub part_of_speech_detail: String,
    /// 在原文中的字节偏移
    pub position: usize,
}

impl Token {
    pub fn new(
        surface: impl Into<String>,
        reading: impl Into<String>,
        base_form: impl Into<String>,
        part_of_speech: impl Into<String>,
        part_of_speech_detail: impl Into<String>,
        position: usize,
    ) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
            base_form: base_form.into(),
            part_of_speech: part_of_speech.into(),
            part_of_speech_detail: part_of_speech_detail.into(),
            position,
        }
    }

    pub fn is_noun(&self) -> bool {
        self.part_of_speech == POS_NOUN
    }

    pub fn is_proper_noun(&self) -> bool {
        self.is_noun() && self.part_of_speech_detail == DETAIL_PROPER_NOUN
    }

    /// 普通名词（名詞-一般）
    pub fn is_common_noun(&self) -> bool {
        self.is_noun() && self.part_of_speech_detail == DETAIL_GENERAL
    }

    /// 内容词：名词 / 动词 / 形容词
    pub fn is_content_word(&self) -> bool {
        matches!(self.part_of_speech.as_str(), POS_NOUN | POS_VERB | POS_ADJECTIVE)
    }

    /// 原形；解析器给出 "*" 或空值时退回表层形
    pub fn lemma(&self) -> &str {
        if self.base_form.is_empty() || self.base_form == "*" {
            &self.surface
        } else {
            &self.base_form
        }
    }

    /// 读音是否可用
    pub fn has_reading(&self) -> bool {
        !self.reading.is_empty() && self.reading != "*"
    }

    /// 在原文中的字节范围
    pub fn span(&self) -> std::ops::Range<usize> {
        self.position..self.position + self.surface.len()
    }
}

/// Token 源（形态素解析器句柄）
///
/// 由宿主持有并传入各阶段；解析器可能需要异步加载词典，
/// 因此接口为 async。失败原样向调用方传播。
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn tokenize(&self, text: &str) -> CaptionResult<Vec<Token>>;
}
