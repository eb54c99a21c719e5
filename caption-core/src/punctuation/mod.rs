//! 标点补全系统
//!
//! Punctuation Engine - 基于句长、接续规则和停顿的标点插入
//!
//! 核心组件：
//! - `config`: PunctuationOptions 配置
//! - `pause_engine`: 停顿 / 单词间隙引擎
//! - `rules`: 规则层（接续词、引号、助词）
//! - `engine`: 标点主引擎

pub mod config;
pub mod engine;
pub mod pause_engine;
pub mod rules;

pub use config::{PauseThresholds, PunctuationOptions};
pub use engine::PunctuationEngine;
pub use pause_engine::{PauseEngine, PauseMark};
pub use rules::RuleLayer;
