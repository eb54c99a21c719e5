//! 分段配置

use serde::{Deserialize, Serialize};

/// 分段选项（时间单位：秒）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationOptions {
    /// 分段最短时长；最后一段可以更短
    pub min_segment_duration: f64,
    /// 分段最长时长
    pub max_segment_duration: f64,
    /// 字幕间隔超过此值时切分（按停顿分段）
    pub pause_threshold: f64,
    /// 前后语境相似度低于此值时切分（按话题分段）
    pub topic_similarity_threshold: f64,
    /// 语境窗口包含的字幕条数
    pub context_window_size: usize,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            min_segment_duration: 60.0,
            max_segment_duration: 300.0,
            pause_threshold: 2.0,
            topic_similarity_threshold: 0.3,
            context_window_size: 5,
        }
    }
}
