//! 引号区间检测
//!
//! 用栈匹配成对的括号；不配对的闭括号忽略，未闭合的开括号不产生区间。

use std::ops::Range;

/// 开括号 → 闭括号
const PAIRS: &[(char, char)] = &[
    ('「', '」'),
    ('『', '』'),
    ('（', '）'),
    ('(', ')'),
    ('\u{201C}', '\u{201D}'),
    ('【', '】'),
];

/// 引号区间（字节偏移，含两端括号）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteSpan {
    pub start: usize,
    pub end: usize,
}

impl QuoteSpan {
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

fn closer_of(open: char) -> Option<char> {
    PAIRS.iter().find(|(o, _)| *o == open).map(|(_, c)| *c)
}

fn is_closer(ch: char) -> bool {
    PAIRS.iter().any(|(_, c)| *c == ch)
}

/// 查找所有配对的引号区间（按闭合顺序，嵌套区间也会返回）
pub fn find_quotation_spans(text: &str) -> Vec<QuoteSpan> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut spans = Vec::new();

    for (pos, ch) in text.char_indices() {
        if let Some(close) = closer_of(ch) {
            stack.push((close, pos));
        } else if is_closer(ch) {
            if let Some(&(expected, start)) = stack.last() {
                if expected == ch {
                    stack.pop();
                    spans.push(QuoteSpan {
                        start,
                        end: pos + ch.len_utf8(),
                    });
                }
            }
        }
    }

    spans
}

/// 偏移是否落在任一区间内
pub fn is_quoted(offset: usize, spans: &[QuoteSpan]) -> bool {
    spans.iter().any(|s| s.contains(offset))
}

/// 将 `range` 按引号区间切分为 (片段, 是否在引号内)
pub(crate) fn partition<'a>(text: &'a str, range: Range<usize>, spans: &[QuoteSpan]) -> Vec<(&'a str, bool)> {
    let mut parts = Vec::new();
    let mut cursor = range.start;

    // 只取最外层区间
    let mut outer: Vec<QuoteSpan> = spans
        .iter()
        .filter(|s| s.start < range.end && s.end > range.start)
        .filter(|s| !spans.iter().any(|o| o != *s && o.start <= s.start && o.end >= s.end))
        .copied()
        .collect();
    outer.sort_by_key(|s| s.start);

    for span in outer {
        let start = span.start.max(range.start);
        let end = span.end.min(range.end);
        if start > cursor {
            parts.push((&text[cursor..start], false));
        }
        if end > start.max(cursor) {
            parts.push((&text[start.max(cursor)..end], true));
        }
        cursor = cursor.max(end);
    }

    if cursor < range.end {
        parts.push((&text[cursor..range.end], false));
    }

    parts
}
