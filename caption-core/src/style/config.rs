//! 文体转换配置

use serde::{Deserialize, Serialize};

/// 常体 / 敬体（だ・である調 / です・ます調）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoliteStyle {
    Plain,
    Polite,
}

/// 四级敬语体系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechStyle {
    /// 谦让语
    Humble,
    /// 丁宁语
    Polite,
    /// 尊敬语
    Respectful,
    /// 口语
    Casual,
}

impl SpeechStyle {
    pub const ALL: [SpeechStyle; 4] = [
        SpeechStyle::Humble,
        SpeechStyle::Polite,
        SpeechStyle::Respectful,
        SpeechStyle::Casual,
    ];

    /// 在规则表行中的列号
    pub(crate) fn column(self) -> usize {
        match self {
            SpeechStyle::Humble => 0,
            SpeechStyle::Polite => 1,
            SpeechStyle::Respectful => 2,
            SpeechStyle::Casual => 3,
        }
    }
}

/// 常体 / 敬体转换选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub target_style: PoliteStyle,
    /// 句子包含其中任一子串时整句不转换
    pub preserve_expressions: Vec<String>,
    /// 引号内的内容保持原样
    pub preserve_quotations: bool,
}

impl StyleOptions {
    pub fn new(target_style: PoliteStyle) -> Self {
        Self {
            target_style,
            ..Self::default()
        }
    }
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            target_style: PoliteStyle::Polite,
            preserve_expressions: Vec::new(),
            preserve_quotations: true,
        }
    }
}

/// 四级敬语转换选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechStyleOptions {
    pub target_style: SpeechStyle,
    pub preserve_expressions: Vec<String>,
    pub preserve_quotations: bool,
    /// 正式度 0.0 - 1.0；≥ 0.5 使用正式接续词表
    pub formality_level: f64,
}

impl SpeechStyleOptions {
    pub fn new(target_style: SpeechStyle) -> Self {
        Self {
            target_style,
            ..Self::default()
        }
    }

    pub fn is_high_formality(&self) -> bool {
        self.formality_level >= 0.5
    }
}

impl Default for SpeechStyleOptions {
    fn default() -> Self {
        Self {
            target_style: SpeechStyle::Polite,
            preserve_expressions: Vec::new(),
            preserve_quotations: true,
            formality_level: 0.5,
        }
    }
}
