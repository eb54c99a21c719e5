//! 文体转换系统
//!
//! Style Converter - 句末文体的判定与改写
//!
//! 核心组件：
//! - `quotes`: 引号区间检测
//! - `sentence`: 句子切分
//! - `rules`: 文体规则表（句末形式、敬语动词、正式度接续词）
//! - `polite`: 常体 / 敬体转换器
//! - `speech`: 四级敬语转换器

pub mod config;
pub(crate) mod converter;
pub mod polite;
pub mod quotes;
pub mod rules;
pub mod sentence;
pub mod speech;

pub use config::{PoliteStyle, SpeechStyle, SpeechStyleOptions, StyleOptions};
pub use polite::PlainPoliteConverter;
pub use quotes::{find_quotation_spans, QuoteSpan};
pub use sentence::{split_sentences, SentenceSpan};
pub use speech::SpeechStyleConverter;
