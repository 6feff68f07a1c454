//! Диалект PostgreSQL

use crate::dialect::Dialect;

/// PostgreSQL: идентификаторы могут содержать буквы Unicode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostgreSqlDialect;

impl Dialect for PostgreSqlDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }
}
