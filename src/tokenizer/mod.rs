//! Лексический анализатор SQL для sqltoken

pub mod cursor;
pub mod operators;
mod readers;
pub mod source;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;
pub mod word;


// Переэкспортируем основные типы
pub use cursor::Cursor;
pub use source::{CharSource, ReadChars};
pub use token::{Position, Token, TokenKind, TokenValue, Word};
pub use tokenizer::Tokenizer;
pub use word::classify_word;
