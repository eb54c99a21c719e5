//! 字幕分段
//!
//! Segmenter - 将有序字幕列表切分为有时长上下限的分段
//!
//! 核心组件：
//! - `config`: SegmentationOptions
//! - `pause`: 按停顿分段
//! - `topic`: 按话题变化分段（语境窗口 + Jaccard 相似度）
//!
//! 分段决策依赖前面的累积状态，必须顺序执行。

pub mod config;
pub mod pause;
pub mod topic;

pub use config::SegmentationOptions;
pub use pause::split_by_pause;
pub use topic::{jaccard, split_by_topic_change, topic_label};

use crate::caption::Caption;

/// 分段关闭原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    /// 停顿或话题变化；受最短时长约束
    Soft,
    /// 再加一条就超过最长时长
    MaxDuration,
    /// 字幕列表结束
    End,
}

/// 当前分段的累积状态
pub(crate) struct SegmentAccumulator<'a> {
    options: &'a SegmentationOptions,
    current: Vec<Caption>,
}

impl<'a> SegmentAccumulator<'a> {
    pub fn new(options: &'a SegmentationOptions) -> Self {
        Self {
            options,
            current: Vec::new(),
        }
    }

    pub fn push(&mut self, caption: &Caption) {
        self.current.push(caption.clone());
    }

    pub fn captions(&self) -> &[Caption] {
        &self.current
    }

    pub fn duration(&self) -> f64 {
        match (self.current.first(), self.current.last()) {
            (Some(first), Some(last)) => last.end_time - first.start_time,
            _ => 0.0,
        }
    }

    /// 加入 `next` 后是否超过最长时长
    pub fn would_exceed_max(&self, next: &Caption) -> bool {
        self.current
            .first()
            .is_some_and(|first| next.end_time - first.start_time > self.options.max_segment_duration)
    }

    /// 尝试关闭当前分段
    ///
    /// 软边界且不足最短时长时返回 None，字幕留在累积中。
    pub fn close(&mut self, boundary: Boundary) -> Option<Vec<Caption>> {
        if self.current.is_empty() {
            return None;
        }

        if boundary == Boundary::Soft && self.duration() < self.options.min_segment_duration {
            tracing::debug!(
                "  ↪️ 分段过短 ({:.1}s < {:.1}s)，并入下一段",
                self.duration(),
                self.options.min_segment_duration
            );
            return None;
        }

        Some(std::mem::take(&mut self.current))
    }
}
