//! sqltoken - лексический анализатор SQL
//!
//! Преобразует текст SQL в упорядоченную последовательность токенов с точными
//! позициями (строка, визуальная колонка). Пробелы и комментарии сохраняются
//! как обычные токены. Символы идентификаторов и набор ключевых слов задает
//! диалект, переданный при создании токенизатора.
//!
//! ```
//! use sqltoken::dialect::GenericSqlDialect;
//! use sqltoken::tokenizer::{TokenKind, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new("SELECT 1", &GenericSqlDialect);
//! let tokens = tokenizer.tokenize().unwrap();
//! assert!(tokens[0].is_keyword("select"));
//! assert_eq!(tokens[2].kind, TokenKind::Number);
//! ```

pub mod common;
pub mod dialect;
pub mod tokenizer;

pub use common::config::{DialectKind, TokenizerConfig};
pub use common::error::{Error, Result, TokenizeError};
pub use dialect::Dialect;
pub use tokenizer::{Position, Token, TokenKind, TokenValue, Tokenizer, Word};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
