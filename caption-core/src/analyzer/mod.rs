//! 形态素解析接口层
//!
//! Token 定义、Token 源接口、字符判定以及用户词典

pub mod dictionary;
pub mod script;
pub mod token;

pub use dictionary::{CustomDictionary, UserDictionary};
pub use token::{Token, TokenSource};
