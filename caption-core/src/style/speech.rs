//! 四级敬语转换器（谦让 / 丁宁 / 尊敬 / 口语）
//!
//! 判定优先级：谦让 > 尊敬 > 丁宁 > 口语。
//! 被转换的句子额外按正式度替换接续词；未转换的句子保持原样。

use crate::caption::Caption;
use crate::style::config::{SpeechStyle, SpeechStyleOptions};
use crate::style::converter::{convert_text, ConvertRequest, SentenceRewriter};
use crate::style::rules::{
    marker_matches, speech_table, FormalityTable, HIGH_FORMALITY, HUMBLE_MARKER, LOW_FORMALITY,
    PLAIN_MARKER, POLITE_MARKER, RESPECTFUL_MARKER,
};

/// 四级敬语转换器
#[derive(Debug, Default, Clone, Copy)]
pub struct SpeechStyleConverter;

impl SpeechStyleConverter {
    pub fn new() -> Self {
        Self
    }

    /// 判定敬语级别
    pub fn detect_style(&self, text: &str) -> Option<SpeechStyle> {
        if marker_matches(&HUMBLE_MARKER, text) {
            Some(SpeechStyle::Humble)
        } else if marker_matches(&RESPECTFUL_MARKER, text) {
            Some(SpeechStyle::Respectful)
        } else if marker_matches(&POLITE_MARKER, text) {
            Some(SpeechStyle::Polite)
        } else if marker_matches(&PLAIN_MARKER, text) {
            Some(SpeechStyle::Casual)
        } else {
            None
        }
    }

    pub fn convert(&self, text: &str, options: &SpeechStyleOptions) -> String {
        let formality: &FormalityTable = if options.is_high_formality() {
            &HIGH_FORMALITY
        } else {
            &LOW_FORMALITY
        };
        let rewriter = SpeechRewriter {
            target: options.target_style,
            formality,
        };
        let request = ConvertRequest {
            target: options.target_style,
            preserve_expressions: &options.preserve_expressions,
            preserve_quotations: options.preserve_quotations,
        };
        convert_text(text, &request, &rewriter)
    }

    pub fn convert_caption(&self, caption: &Caption, options: &SpeechStyleOptions) -> Caption {
        caption.with_text(self.convert(&caption.text, options))
    }

    pub fn convert_captions(&self, captions: &[Caption], options: &SpeechStyleOptions) -> Vec<Caption> {
        captions.iter().map(|c| self.convert_caption(c, options)).collect()
    }
}

struct SpeechRewriter<'a> {
    target: SpeechStyle,
    formality: &'a FormalityTable,
}

impl SentenceRewriter for SpeechRewriter<'_> {
    type Style = SpeechStyle;

    fn classify(&self, text: &str) -> Option<SpeechStyle> {
        SpeechStyleConverter.detect_style(text)
    }

    fn rewrite(&self, piece: &str, from: SpeechStyle, at_sentence_start: bool) -> String {
        let converted = match speech_table(from, self.target) {
            Some(table) => table.rewrite(piece),
            None => piece.to_string(),
        };
        self.formality.rewrite(&converted, at_sentence_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(target: SpeechStyle) -> SpeechStyleOptions {
        SpeechStyleOptions::new(target)
    }

    #[test]
    fn test_detect_style_precedence() {
        let converter = SpeechStyleConverter::new();
        assert_eq!(converter.detect_style("資料を拝見しました。"), Some(SpeechStyle::Humble));
        assert_eq!(converter.detect_style("資料をご覧になりました。"), Some(SpeechStyle::Respectful));
        assert_eq!(converter.detect_style("資料を見ました。"), Some(SpeechStyle::Polite));
        assert_eq!(converter.detect_style("資料を見た。"), Some(SpeechStyle::Casual));
        assert_eq!(converter.detect_style("えっと、その"), None);
    }

    #[test]
    fn test_casual_to_polite() {
        let converter = SpeechStyleConverter::new();
        assert_eq!(converter.convert("明日行く。", &options(SpeechStyle::Polite)), "明日行きます。");
    }

    #[test]
    fn test_polite_to_humble() {
        let converter = SpeechStyleConverter::new();
        let result = converter.convert("資料を見ます。", &options(SpeechStyle::Humble));
        assert_eq!(result, "資料を拝見します。");
        assert_eq!(converter.detect_style(&result), Some(SpeechStyle::Humble));
    }

    #[test]
    fn test_polite_to_respectful() {
        let converter = SpeechStyleConverter::new();
        assert_eq!(
            converter.convert("先生が来ました。", &options(SpeechStyle::Respectful)),
            "先生がいらっしゃいました。"
        );
    }

    #[test]
    fn test_high_formality_connectives() {
        let converter = SpeechStyleConverter::new();
        let opts = SpeechStyleOptions {
            formality_level: 0.8,
            ..options(SpeechStyle::Polite)
        };
        assert_eq!(converter.convert("でも今日は行く。", &opts), "しかし本日は行きます。");
    }

    #[test]
    fn test_connective_after_quotation_is_not_sentence_start() {
        let converter = SpeechStyleConverter::new();
        let opts = SpeechStyleOptions {
            formality_level: 0.8,
            ..options(SpeechStyle::Polite)
        };
        assert_eq!(
            converter.convert("彼は「行く。」でも来た。", &opts),
            "彼は「行く。」でも来ました。"
        );
        // 逗号之后仍按接续词处理
        assert_eq!(
            converter.convert("彼は「行く。」、でも来た。", &opts),
            "彼は「行く。」、しかし来ました。"
        );
    }

    #[test]
    fn test_low_formality_connectives() {
        let converter = SpeechStyleConverter::new();
        let opts = SpeechStyleOptions {
            formality_level: 0.2,
            ..options(SpeechStyle::Casual)
        };
        assert_eq!(converter.convert("しかし本日は行きます。", &opts), "でも今日は行く。");
    }

    #[test]
    fn test_target_style_sentence_untouched() {
        // 已是目标级别的句子不做接续词替换
        let converter = SpeechStyleConverter::new();
        let text = "でも今日は行きます。";
        assert_eq!(converter.convert(text, &options(SpeechStyle::Polite)), text);
    }

    #[test]
    fn test_quotation_preserved() {
        let converter = SpeechStyleConverter::new();
        assert_eq!(
            converter.convert("彼は「明日行く」と言った。", &options(SpeechStyle::Polite)),
            "彼は「明日行く」と言いました。"
        );

        let text = "「昨日 食べた」と言った";
        let result = converter.convert(text, &options(SpeechStyle::Respectful));
        assert!(result.contains("「昨日 食べた」"));
    }

    #[test]
    fn test_preserve_expressions() {
        let converter = SpeechStyleConverter::new();
        let opts = SpeechStyleOptions {
            preserve_expressions: vec!["よろしく".to_string()],
            ..options(SpeechStyle::Humble)
        };
        assert_eq!(converter.convert("よろしく言う。", &opts), "よろしく言う。");
    }

    #[test]
    fn test_idempotent_all_targets() {
        let converter = SpeechStyleConverter::new();
        let texts = [
            "明日行く。",
            "資料を拝見しました。",
            "先生がいらっしゃいました。",
            "でも今日は見た。",
        ];
        for text in texts {
            for target in SpeechStyle::ALL {
                let opts = options(target);
                let once = converter.convert(text, &opts);
                assert_eq!(converter.convert(&once, &opts), once, "{text} → {target:?}");
            }
        }
    }

    #[test]
    fn test_unknown_passthrough_and_empty() {
        let converter = SpeechStyleConverter::new();
        assert_eq!(converter.convert("えっと、その", &options(SpeechStyle::Humble)), "えっと、その");
        assert_eq!(converter.convert("", &options(SpeechStyle::Humble)), "");
    }

    #[test]
    fn test_convert_captions() {
        let converter = SpeechStyleConverter::new();
        let captions = vec![
            Caption::new("1", "明日行く。", 0.0, 1.0),
            Caption::new("2", "資料を見ます。", 1.0, 2.0),
        ];
        let converted = converter.convert_captions(&captions, &options(SpeechStyle::Humble));
        assert_eq!(converted[0].text, "明日参ります。");
        assert_eq!(converted[1].text, "資料を拝見します。");
        assert_eq!(converted[1].id, "2");
        assert_eq!(captions[0].text, "明日行く。");
    }
}
