//! 标点补全配置模块
//!
//! 定义 PunctuationOptions 和停顿阈值

use serde::{Deserialize, Serialize};

/// 停顿阈值（秒）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseThresholds {
    /// 停顿 ≥ 此值插入句号
    pub period: f64,
    /// 停顿 ≥ 此值（且 < period）插入逗号
    pub comma: f64,
}

impl Default for PauseThresholds {
    fn default() -> Self {
        Self {
            period: 0.8,
            comma: 0.3,
        }
    }
}

/// 标点补全配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunctuationOptions {
    /// 连续多少个非句末字符后强制插入句号
    pub max_sentence_length: usize,

    /// 连续多少个字符后强制插入逗号
    pub min_comma_interval: usize,

    /// 去掉标点后的空白，并在句末标点后换行
    pub adjust_spacing: bool,

    /// 停顿阈值
    pub pause_threshold: PauseThresholds,
}

impl PunctuationOptions {
    /// Standard 风格（默认）
    pub fn standard() -> Self {
        Self {
            max_sentence_length: 30,
            min_comma_interval: 10,
            adjust_spacing: true,
            pause_threshold: PauseThresholds::default(),
        }
    }

    /// Dense 风格
    ///
    /// 短句多、逗号密，适合竖排短字幕
    pub fn dense() -> Self {
        Self {
            max_sentence_length: 20,
            min_comma_interval: 8,
            adjust_spacing: true,
            pause_threshold: PauseThresholds {
                period: 0.6,
                comma: 0.25,
            },
        }
    }

    /// Sparse 风格
    ///
    /// 标点克制，适合长篇讲座
    pub fn sparse() -> Self {
        Self {
            max_sentence_length: 45,
            min_comma_interval: 15,
            adjust_spacing: true,
            pause_threshold: PauseThresholds {
                period: 1.2,
                comma: 0.5,
            },
        }
    }

    /// 按名称获取预设（未知名称返回 Standard）
    pub fn from_preset(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dense" => Self::dense(),
            "sparse" => Self::sparse(),
            _ => Self::standard(),
        }
    }
}

impl Default for PunctuationOptions {
    fn default() -> Self {
        Self::standard()
    }
}
