//! 按句转换的公共流程
//!
//! 两种文体转换器共用：引号区间 → 切句 → 保留判定 → 判定文体 → 改写

use crate::style::quotes::{find_quotation_spans, is_quoted, partition};
use crate::style::sentence::split_sentences;

/// 单句改写策略
pub(crate) trait SentenceRewriter {
    type Style: Copy + PartialEq + std::fmt::Debug;

    /// 判定句子文体；无法判定返回 None
    fn classify(&self, text: &str) -> Option<Self::Style>;

    /// 将引号外的片段从 `from` 改写为目标文体
    ///
    /// `at_sentence_start` 为 false 时片段紧跟在引号之后，不在句首。
    fn rewrite(&self, piece: &str, from: Self::Style, at_sentence_start: bool) -> String;
}

pub(crate) struct ConvertRequest<'a, S> {
    pub target: S,
    pub preserve_expressions: &'a [String],
    pub preserve_quotations: bool,
}

pub(crate) fn convert_text<R: SentenceRewriter>(
    text: &str,
    request: &ConvertRequest<'_, R::Style>,
    rewriter: &R,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let quotes = if request.preserve_quotations {
        find_quotation_spans(text)
    } else {
        Vec::new()
    };

    let mut result = String::with_capacity(text.len() + 16);

    for sentence in split_sentences(text, &quotes) {
        let raw = &text[sentence.range.clone()];

        if sentence.is_blank() || is_quoted(sentence.content_start, &quotes) {
            result.push_str(raw);
            continue;
        }

        if let Some(expr) = request
            .preserve_expressions
            .iter()
            .find(|e| !e.is_empty() && raw.contains(e.as_str()))
        {
            tracing::debug!("  🔒 含保留表达 '{}'，整句跳过", expr);
            result.push_str(raw);
            continue;
        }

        let parts = partition(text, sentence.range.clone(), &quotes);
        let unquoted: String = parts.iter().filter(|(_, q)| !q).map(|(p, _)| *p).collect();

        let current = match rewriter.classify(&unquoted) {
            Some(style) if style != request.target => style,
            _ => {
                result.push_str(raw);
                continue;
            }
        };

        tracing::debug!("  🔁 {:?} → {:?}: '{}'", current, request.target, raw.trim());

        for (index, (piece, quoted)) in parts.into_iter().enumerate() {
            if quoted {
                result.push_str(piece);
            } else {
                result.push_str(&rewriter.rewrite(piece, current, index == 0));
            }
        }
    }

    result
}
