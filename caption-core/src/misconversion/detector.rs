//! 误变换检测器
//!
//! 逐个 Token 打分，标出可能的识别错误。只报告，不修改字幕。

use serde::{Deserialize, Serialize};

use crate::analyzer::script::{contains_kanji, hiragana_to_katakana};
use crate::analyzer::{CustomDictionary, Token, TokenSource};
use crate::caption::Caption;
use crate::error::CaptionResult;

/// 基础置信度
const BASE_CONFIDENCE: f64 = 0.5;
/// 固有名词扣分
const PROPER_NOUN_PENALTY: f64 = 0.3;
/// 普通名词加分
const COMMON_NOUN_BONUS: f64 = 0.2;

/// 检测选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MisconversionOptions {
    pub check_kana: bool,
    pub check_kanji: bool,
    /// 低于该置信度的候选不输出
    pub min_confidence: f64,
    /// 跳过自定义词典中的词
    pub use_custom_dictionary: bool,
}

impl Default for MisconversionOptions {
    fn default() -> Self {
        Self {
            check_kana: true,
            check_kanji: true,
            min_confidence: 0.7,
            use_custom_dictionary: true,
        }
    }
}

/// 候选种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateType {
    /// 表记与读音不一致
    Kana,
    /// 含汉字的词
    Kanji,
    Other,
}

/// 误变换候选
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MisconversionCandidate {
    /// 字节偏移
    pub start: usize,
    pub end: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(rename = "type")]
    pub candidate_type: CandidateType,
    pub confidence: f64,
}

/// 误变换检测器
pub struct MisconversionDetector {
    options: MisconversionOptions,
}

impl MisconversionDetector {
    pub fn new(options: MisconversionOptions) -> Self {
        tracing::info!(
            "🔍 误变换检测器初始化: kana={}, kanji={}, min_confidence={}",
            options.check_kana,
            options.check_kanji,
            options.min_confidence
        );
        Self { options }
    }

    /// 检测一段文本
    ///
    /// Token 源的错误原样返回。
    pub async fn detect(
        &self,
        text: &str,
        tokens: &dyn TokenSource,
        dictionary: Option<&dyn CustomDictionary>,
    ) -> CaptionResult<Vec<MisconversionCandidate>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let analyzed = tokens.tokenize(text).await?;
        let mut candidates = Vec::new();

        for token in &analyzed {
            if self.in_dictionary(token, dictionary) {
                tracing::debug!("  📖 词典词，跳过: '{}'", token.surface);
                continue;
            }

            if self.options.check_kana {
                if let Some(candidate) = self.check_kana(token) {
                    candidates.push(candidate);
                }
            }

            if self.options.check_kanji {
                if let Some(candidate) = self.check_kanji(token) {
                    candidates.push(candidate);
                }
            }
        }

        tracing::debug!("🔍 检测完成: {} 个 Token, {} 个候选", analyzed.len(), candidates.len());
        Ok(candidates)
    }

    /// 批量检测，返回 (字幕 id, 候选)；无候选的字幕不出现在结果中
    pub async fn detect_captions(
        &self,
        captions: &[Caption],
        tokens: &dyn TokenSource,
        dictionary: Option<&dyn CustomDictionary>,
    ) -> CaptionResult<Vec<(String, Vec<MisconversionCandidate>)>> {
        let mut report = Vec::new();
        for caption in captions {
            let candidates = self.detect(&caption.text, tokens, dictionary).await?;
            if !candidates.is_empty() {
                report.push((caption.id.clone(), candidates));
            }
        }
        Ok(report)
    }

    pub fn options(&self) -> &MisconversionOptions {
        &self.options
    }

    pub fn update_options(&mut self, options: MisconversionOptions) {
        self.options = options;
    }

    fn in_dictionary(&self, token: &Token, dictionary: Option<&dyn CustomDictionary>) -> bool {
        self.options.use_custom_dictionary
            && dictionary.is_some_and(|dict| dict.contains(&token.surface))
    }

    fn check_kana(&self, token: &Token) -> Option<MisconversionCandidate> {
        if !token.has_reading() || hiragana_to_katakana(&token.surface) == token.reading {
            return None;
        }
        self.emit(token, CandidateType::Kana, Some(token.reading.clone()))
    }

    fn check_kanji(&self, token: &Token) -> Option<MisconversionCandidate> {
        if !contains_kanji(&token.surface) {
            return None;
        }
        self.emit(token, CandidateType::Kanji, None)
    }

    fn emit(
        &self,
        token: &Token,
        candidate_type: CandidateType,
        suggestion: Option<String>,
    ) -> Option<MisconversionCandidate> {
        let confidence = confidence_of(token);
        if confidence < self.options.min_confidence {
            return None;
        }

        let span = token.span();
        Some(MisconversionCandidate {
            start: span.start,
            end: span.end,
            text: token.surface.clone(),
            suggestion,
            candidate_type,
            confidence,
        })
    }
}

impl Default for MisconversionDetector {
    fn default() -> Self {
        Self::new(MisconversionOptions::default())
    }
}

/// 置信度：基础 0.5，固有名词 -0.3，普通名词 +0.2，截断到 [0, 1]
pub fn confidence_of(token: &Token) -> f64 {
    let mut score = BASE_CONFIDENCE;
    if token.is_proper_noun() {
        score -= PROPER_NOUN_PENALTY;
    }
    if token.is_common_noun() {
        score += COMMON_NOUN_BONUS;
    }
    score.clamp(0.0, 1.0)
}
