//! 字幕数据模型
//!
//! Caption / Word / Segment，字段名与前端 JSON 保持一致（camelCase）

use serde::{Deserialize, Serialize};

/// 单词级时间戳（秒）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            text: text.into(),
            start_time,
            end_time,
        }
    }
}

/// 一条字幕
///
/// 引擎不会原地修改 Caption，所有阶段都返回新的值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    pub id: String,
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    /// 本条字幕之后的停顿时长（秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_after: Option<f64>,
    /// 单词级时间戳（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
}

impl Caption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            start_time,
            end_time,
            pause_after: None,
            words: None,
        }
    }

    pub fn with_pause_after(mut self, pause: f64) -> Self {
        self.pause_after = Some(pause);
        self
    }

    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = Some(words);
        self
    }

    /// 返回替换文本后的新字幕
    pub fn with_text(&self, text: String) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// 字幕分段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_time: f64,
    pub end_time: f64,
    pub captions: Vec<Caption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Segment {
    /// 由一组连续字幕构造分段（captions 不能为空）
    pub(crate) fn from_captions(captions: Vec<Caption>, topic: Option<String>) -> Self {
        let start_time = captions.first().map(|c| c.start_time).unwrap_or_default();
        let end_time = captions.last().map(|c| c.end_time).unwrap_or_default();
        Self {
            start_time,
            end_time,
            captions,
            topic,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// 分段内全部字幕文本（按顺序拼接）
    pub fn text(&self) -> String {
        self.captions.iter().map(|c| c.text.as_str()).collect()
    }
}
