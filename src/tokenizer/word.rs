//! Классификация слов
//!
//! Строит значение `Word` по разобранному тексту: сохраняет исходный регистр,
//! ищет слово среди зарезервированных (без учета регистра ASCII) и
//! запоминает кавычку. Кавычки на классификацию не влияют.

use crate::dialect::Dialect;
use crate::tokenizer::token::Word;

/// Строит слово с учетом ключевых слов диалекта
pub fn classify_word(dialect: &dyn Dialect, value: impl Into<String>, quote_style: Option<char>) -> Word {
    let value = value.into();
    let keyword = dialect
        .lookup_keyword(&value.to_ascii_uppercase())
        .map(str::to_string);

    Word {
        value,
        keyword,
        quote_style,
    }
}
