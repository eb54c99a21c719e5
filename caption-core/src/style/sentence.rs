//! 句子切分
//!
//! 在句末标点处切分，标点留在所在句子中；引号内的句末标点不切分。

use std::ops::Range;

use crate::analyzer::script::is_terminator;
use crate::style::quotes::{is_quoted, QuoteSpan};

/// 一个句子在原文中的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan {
    /// 句子范围（含前导空白和句末标点）
    pub range: Range<usize>,
    /// 第一个非空白字符的偏移
    pub content_start: usize,
}

impl SentenceSpan {
    pub fn is_blank(&self) -> bool {
        self.content_start >= self.range.end
    }
}

/// 切分句子；各句首尾相接，覆盖全文
pub fn split_sentences(text: &str, quotes: &[QuoteSpan]) -> Vec<SentenceSpan> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if !is_terminator(ch) || is_quoted(pos, quotes) {
            continue;
        }
        // 连续的句末标点（「？！」）归入同一句
        let mut end = pos + ch.len_utf8();
        while let Some(&(next_pos, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = next_pos + next.len_utf8();
            chars.next();
        }
        sentences.push(make_span(text, start..end));
        start = end;
    }

    if start < text.len() {
        sentences.push(make_span(text, start..text.len()));
    }

    sentences
}

fn make_span(text: &str, range: Range<usize>) -> SentenceSpan {
    let slice = &text[range.clone()];
    let leading = slice.len() - slice.trim_start().len();
    SentenceSpan {
        content_start: range.start + leading,
        range,
    }
}
