//! 误变换检测
//!
//! Misconversion Detector - 基于 Token 的识别错误候选检测（只读）

pub mod detector;

pub use detector::{
    confidence_of, CandidateType, MisconversionCandidate, MisconversionDetector, MisconversionOptions,
};
