//! Константы для sqltoken

/// Ширина табуляции в визуальных колонках
pub const TAB_WIDTH: usize = 4;

/// Номер первой строки
pub const FIRST_LINE: usize = 1;

/// Номер первой колонки
pub const FIRST_COLUMN: usize = 0;

/// Максимальная длина заглядывания вперед (в символах)
pub const MAX_LOOKAHEAD: usize = 2;

/// Кавычка строкового литерала
pub const STRING_QUOTE: char = '\'';

/// Символ экранирования в диалектах с escape-последовательностями
pub const ESCAPE_CHAR: char = '\\';

/// Переменная окружения с именем диалекта
pub const ENV_DIALECT: &str = "SQLTOKEN_DIALECT";
