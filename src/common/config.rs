//! Конфигурация для sqltoken
//!
//! Токенизатор настраивается только диалектом; конфигурация определяет,
//! какой диалект построить.

use crate::common::constants::ENV_DIALECT;
use crate::common::{Error, Result};
use crate::dialect::{Dialect, GenericSqlDialect, MySqlDialect, PostgreSqlDialect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Поддерживаемые диалекты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// Обобщенный SQL
    #[default]
    Generic,
    /// PostgreSQL
    #[serde(rename = "postgresql")]
    PostgreSql,
    /// MySQL
    #[serde(rename = "mysql")]
    MySql,
}

impl DialectKind {
    /// Строит диалект
    pub fn build(self) -> Box<dyn Dialect> {
        match self {
            DialectKind::Generic => Box::new(GenericSqlDialect),
            DialectKind::PostgreSql => Box::new(PostgreSqlDialect),
            DialectKind::MySql => Box::new(MySqlDialect),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DialectKind::Generic => "generic",
            DialectKind::PostgreSql => "postgresql",
            DialectKind::MySql => "mysql",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DialectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "generic" | "ansi" => Ok(DialectKind::Generic),
            "postgresql" | "postgres" | "pg" => Ok(DialectKind::PostgreSql),
            "mysql" => Ok(DialectKind::MySql),
            _ => Err(Error::configuration(format!("Unsupported dialect: {}", s))),
        }
    }
}

/// Конфигурация токенизатора
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Диалект SQL
    pub dialect: DialectKind,
}

impl TokenizerConfig {
    pub fn new(dialect: DialectKind) -> Self {
        Self { dialect }
    }

    /// Разбирает конфигурацию из строки TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(format!("Invalid TOML: {}", e)))
    }

    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Конфигурация загружена из {}: диалект {}", path.as_ref().display(), config.dialect);
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("Cannot serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = TokenizerConfig::default();

        if let Ok(dialect) = std::env::var(ENV_DIALECT) {
            config.dialect = dialect.parse()?;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой
    pub fn merge(mut self, other: Self) -> Self {
        if other.dialect != DialectKind::default() {
            self.dialect = other.dialect;
        }
        self
    }

    /// Строит выбранный диалект
    pub fn build_dialect(&self) -> Box<dyn Dialect> {
        self.dialect.build()
    }
}
