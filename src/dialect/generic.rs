//! Диалект по умолчанию

use crate::dialect::Dialect;

/// Обобщенный SQL без особенностей конкретной СУБД
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericSqlDialect;

impl Dialect for GenericSqlDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_' || ch == '@' || ch == '#'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_' || ch == '@' || ch == '#' || ch == '$'
    }
}
