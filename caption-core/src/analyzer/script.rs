//! 字符分类
//!
//! 漢字判定、假名转换与标点判定

/// 句末标点
pub const TERMINATORS: &[char] = &['。', '！', '？', '!', '?'];

/// 插入用的句号和逗号
pub const PERIOD: char = '。';
pub const COMMA: char = '、';

/// CJK 表意文字（U+4E00 ~ U+9FFF, 扩展 A, 兼容区, 以及「々」）
pub fn is_kanji(ch: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&ch)
        || ('\u{3400}'..='\u{4DBF}').contains(&ch)
        || ('\u{F900}'..='\u{FAFF}').contains(&ch)
        || ch == '々'
}

pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

pub fn is_terminator(ch: char) -> bool {
    TERMINATORS.contains(&ch)
}

pub fn is_comma(ch: char) -> bool {
    matches!(ch, '、' | '，' | ',')
}

/// 检查字符是否为标点符号（含括号）
pub fn is_punctuation(ch: char) -> bool {
    is_terminator(ch)
        || is_comma(ch)
        || matches!(
            ch,
            '.' | '．' | '・' | '：' | '；' | ':' | ';' | '…' | '「' | '」' | '『' | '』' | '（'
                | '）' | '(' | ')' | '【' | '】' | '\u{201C}' | '\u{201D}' | '"'
        )
}

/// 平假名 → 片假名（其他字符原样保留）
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if ('\u{3041}'..='\u{3096}').contains(&ch) {
                char::from_u32(ch as u32 + 0x60).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}
