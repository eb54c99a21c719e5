//! 标点主引擎
//!
//! 整合句长规则、RuleLayer 和 PauseEngine，提供完整的标点补全

use crate::analyzer::script::{is_comma, is_punctuation, is_terminator, COMMA, PERIOD};
use crate::caption::{Caption, Word};
use crate::punctuation::config::PunctuationOptions;
use crate::punctuation::pause_engine::PauseEngine;
use crate::punctuation::rules::RuleLayer;

/// 闭合括号
fn is_closer(ch: char) -> bool {
    matches!(ch, '」' | '』' | '）' | ')' | '】' | '\u{201D}')
}

/// 引用助词（「…。」と / 「…。」って 之后不换行）
fn is_quote_particle(ch: char) -> bool {
    matches!(ch, 'と' | 'っ')
}

fn is_inline_space(ch: char) -> bool {
    ch.is_whitespace() && ch != '\n'
}

/// 标点引擎
pub struct PunctuationEngine {
    options: PunctuationOptions,
    pause_engine: PauseEngine,
}

impl PunctuationEngine {
    pub fn new(options: PunctuationOptions) -> Self {
        tracing::info!(
            "🎯 PunctuationEngine::new - 配置: max_sentence={}, comma_interval={}, adjust_spacing={}",
            options.max_sentence_length,
            options.min_comma_interval,
            options.adjust_spacing
        );

        Self {
            pause_engine: PauseEngine::new(options.pause_threshold),
            options,
        }
    }

    /// 通用标点补全
    ///
    /// 1. 补全句末标点
    /// 2. 超长句强制句号
    /// 3. 超长片段强制逗号
    /// 4. 接续规则
    /// 5. 空白调整
    pub fn complete(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let mut result = Self::ensure_terminator(text);
        result = Self::insert_by_length(&result, self.options.max_sentence_length, PERIOD, is_terminator);
        result = Self::insert_by_length(&result, self.options.min_comma_interval, COMMA, |ch| {
            is_terminator(ch) || is_comma(ch)
        });
        result = RuleLayer::apply_connectives(&result);

        if self.options.adjust_spacing {
            result = Self::adjust_spacing(&result);
        }

        result
    }

    /// 基于尾部停顿的补全
    pub fn complete_with_pause(&self, text: &str, pause_duration: f64) -> String {
        self.pause_engine.complete_with_pause(text, pause_duration)
    }

    /// 基于单词间隙的补全
    pub fn complete_with_word_timing(&self, text: &str, words: &[Word]) -> String {
        self.pause_engine.complete_with_word_timing(text, words)
    }

    /// 处理单条字幕：单词间隙 → 尾部停顿 → 通用补全
    pub fn complete_caption(&self, caption: &Caption) -> Caption {
        let mut text = caption.text.clone();

        if let Some(words) = caption.words.as_deref().filter(|w| !w.is_empty()) {
            text = self.complete_with_word_timing(&text, words);
        }

        if let Some(pause) = caption.pause_after {
            text = self.complete_with_pause(&text, pause);
        }

        caption.with_text(self.complete(&text))
    }

    /// 批量处理（字幕之间互不依赖）
    pub fn complete_captions(&self, captions: &[Caption]) -> Vec<Caption> {
        captions.iter().map(|c| self.complete_caption(c)).collect()
    }

    /// 句末没有终止符时补句号
    ///
    /// 末尾的闭合括号跳过后再判断；末尾的逗号视为跨字幕的续接，保留不动。
    fn ensure_terminator(text: &str) -> String {
        let body = text.trim_end();
        let last_meaningful = body.chars().rev().find(|ch| !is_closer(*ch));

        match last_meaningful {
            Some(ch) if is_terminator(ch) || is_comma(ch) => text.to_string(),
            _ => format!("{}{}{}", body, PERIOD, &text[body.len()..]),
        }
    }

    /// 连续 `limit` 个非断点字符后插入 `mark`
    ///
    /// 不在标点旁插入，也不拆开连续的 ASCII 字母数字。
    fn insert_by_length(text: &str, limit: usize, mark: char, is_break: impl Fn(char) -> bool) -> String {
        if limit == 0 {
            return text.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len() + 8);
        let mut run = 0;

        for (i, &ch) in chars.iter().enumerate() {
            result.push(ch);

            if is_break(ch) || ch.is_whitespace() {
                run = 0;
                continue;
            }
            // 括号、逗号等不计入长度
            if is_punctuation(ch) {
                continue;
            }
            run += 1;

            if run < limit {
                continue;
            }

            let Some(&next) = chars.get(i + 1) else {
                continue;
            };
            if is_punctuation(next) || next.is_whitespace() {
                continue;
            }
            if ch.is_ascii_alphanumeric() && next.is_ascii_alphanumeric() {
                continue;
            }

            tracing::debug!("  ✂️ 连续 {} 字符，插入 '{}'", run, mark);
            result.push(mark);
            run = 0;
        }

        result
    }

    /// 去掉标点后的空白；句末标点（含其后的闭合括号）之后统一为一个换行
    fn adjust_spacing(text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len() + 8);
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            result.push(ch);
            i += 1;

            if is_terminator(ch) {
                while i < chars.len() && (is_terminator(chars[i]) || is_closer(chars[i])) {
                    result.push(chars[i]);
                    i += 1;
                }
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                if i < chars.len() && is_quote_particle(chars[i]) {
                    continue;
                }
                result.push('\n');
            } else if is_punctuation(ch) {
                while i < chars.len() && is_inline_space(chars[i]) {
                    i += 1;
                }
            }
        }

        result
    }

    pub fn options(&self) -> &PunctuationOptions {
        &self.options
    }

    pub fn update_options(&mut self, options: PunctuationOptions) {
        self.pause_engine.update_thresholds(options.pause_threshold);
        self.options = options;
    }
}

impl Default for PunctuationEngine {
    fn default() -> Self {
        Self::new(PunctuationOptions::default())
    }
}
