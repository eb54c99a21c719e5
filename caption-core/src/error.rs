use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptionError {
    // 形态素解析错误
    #[error("Token source not ready: {0}")]
    AnalyzerNotReady(String),

    #[error("Tokenize failed: {0}")]
    Tokenizer(String),

    // 用户词典错误
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type CaptionResult<T> = Result<T, CaptionError>;
