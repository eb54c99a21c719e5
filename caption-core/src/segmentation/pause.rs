//! 按停顿分段
//!
//! 顺序累积字幕，在停顿或时长上限处关闭分段。
//! 不足最短时长的分段不单独输出，其字幕并入下一段继续累积。

use crate::caption::{Caption, Segment};
use crate::segmentation::config::SegmentationOptions;
use crate::segmentation::{Boundary, SegmentAccumulator};

/// 按停顿切分字幕列表
///
/// 每条字幕恰好出现在一个分段中，顺序不变。
pub fn split_by_pause(captions: &[Caption], options: &SegmentationOptions) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut acc = SegmentAccumulator::new(options);

    for (i, caption) in captions.iter().enumerate() {
        acc.push(caption);

        let boundary = match captions.get(i + 1) {
            None => Boundary::End,
            Some(next) if acc.would_exceed_max(next) => Boundary::MaxDuration,
            Some(next) if next.start_time - caption.end_time > options.pause_threshold => {
                tracing::debug!(
                    "  ⏸️ 停顿 {:.2}s > {:.2}s @ {}",
                    next.start_time - caption.end_time,
                    options.pause_threshold,
                    caption.id
                );
                Boundary::Soft
            }
            Some(_) => continue,
        };

        if let Some(captions) = acc.close(boundary) {
            segments.push(Segment::from_captions(captions, None));
        }
    }

    tracing::debug!("✂️ 按停顿分段: {} 条字幕 → {} 段", captions.len(), segments.len());
    segments
}
