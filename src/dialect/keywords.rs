//! Таблица зарезервированных слов SQL
//!
//! Общий набор ключевых слов, который используют диалекты по умолчанию.
//! Все слова хранятся в каноническом верхнем регистре.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Ключевые слова DDL
const DDL_KEYWORDS: &[&str] = &[
    "CREATE", "DROP", "ALTER", "TABLE", "INDEX", "DATABASE", "SCHEMA", "VIEW",
    "MATERIALIZED", "CONSTRAINT", "PRIMARY", "FOREIGN", "KEY", "REFERENCES",
    "UNIQUE", "DEFAULT", "CHECK", "ADD", "COLUMN", "RENAME", "TO", "CASCADE",
    "RESTRICT", "TRUNCATE", "TEMPORARY", "EXTERNAL", "IF",
];

/// Ключевые слова DML и запросов
const DML_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "INTO", "VALUES", "SET",
    "WHERE", "HAVING", "GROUP", "ORDER", "BY", "LIMIT", "OFFSET", "FETCH",
    "FIRST", "NEXT", "ROW", "ROWS", "ONLY", "WITH", "RECURSIVE", "RETURNING",
    "DISTINCT", "ALL", "ANY", "SOME", "AS", "ASC", "DESC", "NULLS", "LAST",
    "COPY", "STDIN",
];

/// Соединения и операции над множествами
const JOIN_KEYWORDS: &[&str] = &[
    "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "CROSS", "NATURAL", "ON",
    "USING", "UNION", "INTERSECT", "EXCEPT", "LATERAL",
];

/// Логические операторы и предикаты
const PREDICATE_KEYWORDS: &[&str] = &[
    "AND", "OR", "NOT", "IN", "EXISTS", "BETWEEN", "LIKE", "ILIKE", "SIMILAR",
    "IS", "NULL", "TRUE", "FALSE", "UNKNOWN", "ESCAPE",
];

/// Выражения, функции и агрегаты
const EXPRESSION_KEYWORDS: &[&str] = &[
    "CASE", "WHEN", "THEN", "ELSE", "END", "CAST", "EXTRACT", "COLLATE",
    "COUNT", "SUM", "AVG", "MIN", "MAX", "OVER", "PARTITION", "WINDOW", "RANGE",
    "PRECEDING", "FOLLOWING", "CURRENT", "UNBOUNDED", "FILTER", "WITHIN",
    "INTERVAL", "AT", "ZONE", "CURRENT_DATE", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "LOCALTIME", "LOCALTIMESTAMP",
];

/// Типы данных
const TYPE_KEYWORDS: &[&str] = &[
    "INT", "INTEGER", "SMALLINT", "BIGINT", "REAL", "FLOAT", "DOUBLE",
    "PRECISION", "DECIMAL", "NUMERIC", "CHAR", "CHARACTER", "VARCHAR",
    "VARYING", "TEXT", "BOOLEAN", "DATE", "TIME", "TIMESTAMP", "UUID", "BYTEA",
    "REGCLASS", "ARRAY", "CLOB", "BLOB", "BINARY", "VARBINARY",
];

/// Транзакции и права доступа
const TRANSACTION_KEYWORDS: &[&str] = &[
    "BEGIN", "START", "COMMIT", "ROLLBACK", "TRANSACTION", "SAVEPOINT",
    "ISOLATION", "LEVEL", "READ", "WRITE", "GRANT", "REVOKE",
];

lazy_static! {
    /// Все зарезервированные слова
    static ref SQL_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for group in [
            DDL_KEYWORDS,
            DML_KEYWORDS,
            JOIN_KEYWORDS,
            PREDICATE_KEYWORDS,
            EXPRESSION_KEYWORDS,
            TYPE_KEYWORDS,
            TRANSACTION_KEYWORDS,
        ] {
            set.extend(group.iter().copied());
        }
        set
    };
}

/// Ищет слово в общей таблице
///
/// `word` должен быть уже приведен к верхнему регистру.
pub fn lookup(word: &str) -> Option<&'static str> {
    SQL_KEYWORDS.get(word).copied()
}

/// Количество зарезервированных слов
pub fn keyword_count() -> usize {
    SQL_KEYWORDS.len()
}
