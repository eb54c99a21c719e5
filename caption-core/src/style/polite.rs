//! 常体 / 敬体转换器

use crate::caption::Caption;
use crate::style::config::{PoliteStyle, StyleOptions};
use crate::style::converter::{convert_text, ConvertRequest, SentenceRewriter};
use crate::style::rules::{
    marker_matches, PLAIN_MARKER, PLAIN_TO_POLITE_TABLE, POLITE_MARKER, POLITE_TO_PLAIN_TABLE,
};

/// 常体 / 敬体转换器
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPoliteConverter;

impl PlainPoliteConverter {
    pub fn new() -> Self {
        Self
    }

    /// 判定文体（敬体标记优先）
    pub fn detect_style(&self, text: &str) -> Option<PoliteStyle> {
        if marker_matches(&POLITE_MARKER, text) {
            Some(PoliteStyle::Polite)
        } else if marker_matches(&PLAIN_MARKER, text) {
            Some(PoliteStyle::Plain)
        } else {
            None
        }
    }

    pub fn convert(&self, text: &str, options: &StyleOptions) -> String {
        let request = ConvertRequest {
            target: options.target_style,
            preserve_expressions: &options.preserve_expressions,
            preserve_quotations: options.preserve_quotations,
        };
        convert_text(text, &request, self)
    }

    pub fn convert_caption(&self, caption: &Caption, options: &StyleOptions) -> Caption {
        caption.with_text(self.convert(&caption.text, options))
    }

    pub fn convert_captions(&self, captions: &[Caption], options: &StyleOptions) -> Vec<Caption> {
        captions.iter().map(|c| self.convert_caption(c, options)).collect()
    }
}

impl SentenceRewriter for PlainPoliteConverter {
    type Style = PoliteStyle;

    fn classify(&self, text: &str) -> Option<PoliteStyle> {
        self.detect_style(text)
    }

    fn rewrite(&self, piece: &str, from: PoliteStyle, _at_sentence_start: bool) -> String {
        match from {
            PoliteStyle::Plain => PLAIN_TO_POLITE_TABLE.rewrite(piece),
            PoliteStyle::Polite => POLITE_TO_PLAIN_TABLE.rewrite(piece),
        }
    }
}
