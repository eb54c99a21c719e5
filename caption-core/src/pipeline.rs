//! 字幕处理流水线
//!
//! 按固定顺序串联各阶段：标点 → 常体/敬体 → 四级敬语；
//! 误变换检测与分段单独调用。流水线本身不保存跨调用状态。

use crate::analyzer::{CustomDictionary, TokenSource};
use crate::caption::{Caption, Segment};
use crate::config::CaptionConfig;
use crate::error::CaptionResult;
use crate::misconversion::{MisconversionCandidate, MisconversionDetector};
use crate::punctuation::PunctuationEngine;
use crate::segmentation::{split_by_pause, split_by_topic_change};
use crate::style::{PlainPoliteConverter, SpeechStyleConverter};

/// 字幕处理流水线
pub struct CaptionPipeline {
    config: CaptionConfig,
    punctuation: PunctuationEngine,
    detector: MisconversionDetector,
}

impl CaptionPipeline {
    pub fn new(config: CaptionConfig) -> Self {
        tracing::info!(
            "🎬 创建字幕流水线: plain_polite={}, speech={}",
            config.plain_polite.is_some(),
            config.speech.is_some()
        );
        Self {
            punctuation: PunctuationEngine::new(config.punctuation.clone()),
            detector: MisconversionDetector::new(config.misconversion.clone()),
            config,
        }
    }

    /// 标点补全并统一文体，返回新的字幕列表
    pub fn normalize(&self, captions: &[Caption]) -> Vec<Caption> {
        let mut result = self.punctuation.complete_captions(captions);

        if let Some(options) = &self.config.plain_polite {
            result = PlainPoliteConverter::new().convert_captions(&result, options);
        }
        if let Some(options) = &self.config.speech {
            result = SpeechStyleConverter::new().convert_captions(&result, options);
        }

        result
    }

    /// 误变换检测报告（不修改字幕）
    pub async fn review(
        &self,
        captions: &[Caption],
        tokens: &dyn TokenSource,
        dictionary: Option<&dyn CustomDictionary>,
    ) -> CaptionResult<Vec<(String, Vec<MisconversionCandidate>)>> {
        self.detector.detect_captions(captions, tokens, dictionary).await
    }

    pub fn segment_by_pause(&self, captions: &[Caption]) -> Vec<Segment> {
        split_by_pause(captions, &self.config.segmentation)
    }

    pub async fn segment_by_topic(
        &self,
        captions: &[Caption],
        tokens: &dyn TokenSource,
    ) -> CaptionResult<Vec<Segment>> {
        split_by_topic_change(captions, &self.config.segmentation, tokens).await
    }

    pub fn config(&self) -> &CaptionConfig {
        &self.config
    }
}

impl Default for CaptionPipeline {
    fn default() -> Self {
        Self::new(CaptionConfig::default())
    }
}
