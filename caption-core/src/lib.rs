//! Caption Core Engine
//!
//! 日文字幕规范化与分段引擎：标点补全、文体统一、误变换检测、分段

#![warn(rust_2018_idioms)]

pub mod analyzer;
pub mod caption;
pub mod config;
pub mod error;
pub mod misconversion;
pub mod pipeline;
pub mod punctuation;
pub mod segmentation;
pub mod style;

// Re-export key types
pub use analyzer::{CustomDictionary, Token, TokenSource, UserDictionary};
pub use caption::{Caption, Segment, Word};
pub use config::CaptionConfig;
pub use error::{CaptionError, CaptionResult};
pub use misconversion::{CandidateType, MisconversionCandidate, MisconversionDetector, MisconversionOptions};
pub use pipeline::CaptionPipeline;
pub use punctuation::{PauseThresholds, PunctuationEngine, PunctuationOptions};
pub use segmentation::{split_by_pause, split_by_topic_change, SegmentationOptions};
pub use style::{
    PlainPoliteConverter, PoliteStyle, SpeechStyle, SpeechStyleConverter, SpeechStyleOptions, StyleOptions,
};

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): 按 CAPTION_LOG 过滤，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("CAPTION_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
