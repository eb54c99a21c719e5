//! 停顿检测引擎
//!
//! 根据字幕尾部停顿或单词间隙插入句号 / 逗号

use crate::analyzer::script::{is_comma, is_punctuation, is_terminator, COMMA, PERIOD};
use crate::caption::Word;
use crate::punctuation::config::PauseThresholds;

/// 停顿对应的标点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseMark {
    None,
    Comma,
    Period,
}

impl PauseMark {
    pub fn as_char(self) -> Option<char> {
        match self {
            PauseMark::None => None,
            PauseMark::Comma => Some(COMMA),
            PauseMark::Period => Some(PERIOD),
        }
    }
}

/// 停顿检测引擎
pub struct PauseEngine {
    thresholds: PauseThresholds,
}

impl PauseEngine {
    pub fn new(thresholds: PauseThresholds) -> Self {
        Self { thresholds }
    }

    /// 停顿时长 → 标点
    ///
    /// 恰好等于阈值时取较大的标点
    pub fn classify_pause(&self, pause: f64) -> PauseMark {
        if pause >= self.thresholds.period {
            PauseMark::Period
        } else if pause >= self.thresholds.comma {
            PauseMark::Comma
        } else {
            PauseMark::None
        }
    }

    /// 根据字幕尾部停顿补全末尾标点
    pub fn complete_with_pause(&self, text: &str, pause_duration: f64) -> String {
        let body = text.trim_end();
        let Some(last) = body.chars().last() else {
            return text.to_string();
        };
        let tail = &text[body.len()..];

        let completed = match self.classify_pause(pause_duration) {
            PauseMark::Period if is_terminator(last) => return text.to_string(),
            PauseMark::Period if is_comma(last) => {
                // 逗号升级为句号
                format!("{}{}", &body[..body.len() - last.len_utf8()], PERIOD)
            }
            PauseMark::Period => format!("{}{}", body, PERIOD),
            PauseMark::Comma if is_terminator(last) || is_comma(last) => return text.to_string(),
            PauseMark::Comma => format!("{}{}", body, COMMA),
            PauseMark::None => return text.to_string(),
        };

        tracing::debug!("⏸ 尾部停顿 {:.2}s → '{}'", pause_duration, completed);
        format!("{}{}", completed, tail)
    }

    /// 根据单词间隙在单词之后插入标点
    ///
    /// 单词按顺序在原文中查找；找不到的单词跳过。
    pub fn complete_with_word_timing(&self, text: &str, words: &[Word]) -> String {
        if text.is_empty() || words.len() < 2 {
            return text.to_string();
        }

        let mut insertions: Vec<(usize, char)> = Vec::new();
        let mut cursor = 0;

        for pair in words.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let needle = current.text.trim();
            if needle.is_empty() {
                continue;
            }

            let Some(found) = text[cursor..].find(needle) else {
                tracing::debug!("    ⏭  单词 '{}' 不在文本中，跳过", needle);
                continue;
            };
            let end = cursor + found + needle.len();
            cursor = end;

            let gap = next.start_time - current.end_time;
            let Some(mark) = self.classify_pause(gap).as_char() else {
                continue;
            };

            if text[end..].chars().next().is_some_and(is_punctuation) {
                continue;
            }

            tracing::debug!("  🎯 '{}' 后有 {:.2}s 间隙，插入 '{}'", needle, gap, mark);
            insertions.push((end, mark));
        }

        if insertions.is_empty() {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len() + insertions.len() * 3);
        let mut last = 0;
        for (pos, mark) in insertions {
            result.push_str(&text[last..pos]);
            result.push(mark);
            last = pos;
        }
        result.push_str(&text[last..]);
        result
    }

    pub fn thresholds(&self) -> &PauseThresholds {
        &self.thresholds
    }

    pub fn update_thresholds(&mut self, thresholds: PauseThresholds) {
        self.thresholds = thresholds;
    }
}

impl Default for PauseEngine {
    fn default() -> Self {
        Self::new(PauseThresholds::default())
    }
}
