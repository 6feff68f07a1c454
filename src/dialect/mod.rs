//! SQL диалекты
//!
//! Диалект - это стратегия, которую токенизатор получает при создании:
//! он определяет, какие символы образуют идентификаторы, какие слова
//! зарезервированы и какими кавычками выделяются идентификаторы.
//! Токенизатор не знает о конкретных диалектах.

pub mod generic;
pub mod keywords;
pub mod mysql;
pub mod postgresql;


pub use generic::GenericSqlDialect;
pub use mysql::MySqlDialect;
pub use postgresql::PostgreSqlDialect;

use std::fmt;

/// Набор возможностей SQL диалекта
pub trait Dialect: fmt::Debug {
    /// Имя диалекта для логов и конфигурации
    fn name(&self) -> &'static str;

    /// Может ли символ начинать идентификатор
    fn is_identifier_start(&self, ch: char) -> bool;

    /// Может ли символ продолжать идентификатор
    fn is_identifier_part(&self, ch: char) -> bool;

    /// Ищет зарезервированное слово
    ///
    /// `word` приходит уже в верхнем регистре. Возвращает каноническое написание.
    fn lookup_keyword(&self, word: &str) -> Option<&'static str> {
        keywords::lookup(word)
    }

    /// Может ли символ открывать идентификатор в кавычках
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"'
    }

    /// Поддерживаются ли escape-последовательности `\'` и `\\` в строках
    fn supports_backslash_escape(&self) -> bool {
        false
    }
}
