//! Обработка ошибок для sqltoken

use crate::tokenizer::token::{Position, Token};
use thiserror::Error;

/// Основной тип ошибки для sqltoken
#[derive(Error, Debug)]
pub enum Error {
    /// Строковый литерал не закрыт до конца входных данных
    #[error("unterminated string literal starting at {from} (input ended at {to})")]
    UnterminatedString { from: Position, to: Position },

    /// Блочный комментарий не закрыт до конца входных данных
    #[error("unterminated block comment starting at {from} (input ended at {to})")]
    UnterminatedComment { from: Position, to: Position },

    /// Идентификатор в кавычках не закрыт до конца входных данных
    #[error("unterminated quoted identifier starting at {from} (input ended at {to})")]
    UnterminatedQuotedIdentifier { from: Position, to: Position },

    /// Символ, который не подходит ни под одно правило разбора
    #[error("invalid character {ch:?} at {position}")]
    InvalidCharacter { ch: char, position: Position },

    /// Ошибка чтения входного потока
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для sqltoken
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Позиция, на которой остановился разбор (только для лексических ошибок)
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::UnterminatedString { to, .. }
            | Self::UnterminatedComment { to, .. }
            | Self::UnterminatedQuotedIdentifier { to, .. } => Some(*to),
            Self::InvalidCharacter { position, .. } => Some(*position),
            Self::Io(_) | Self::Configuration { .. } => None,
        }
    }

    /// Является ли ошибка лексической (а не ошибкой ввода-вывода или конфигурации)
    pub fn is_lexical(&self) -> bool {
        self.position().is_some()
    }
}

/// Ошибка токенизации вместе с токенами, разобранными до сбоя
#[derive(Error, Debug)]
#[error("{error} ({} tokens scanned before failure)", tokens.len())]
pub struct TokenizeError {
    /// Причина остановки
    #[source]
    pub error: Error,
    /// Токены, успешно разобранные до ошибки
    pub tokens: Vec<Token>,
}

impl TokenizeError {
    pub fn new(error: Error, tokens: Vec<Token>) -> Self {
        Self { error, tokens }
    }

    /// Разделяет ошибку и частичный результат
    pub fn into_parts(self) -> (Error, Vec<Token>) {
        (self.error, self.tokens)
    }
}
