//! Пример использования токенизатора sqltoken

use sqltoken::dialect::{GenericSqlDialect, MySqlDialect};
use sqltoken::{Dialect, TokenKind, Tokenizer, TokenizerConfig};

fn main() {
    env_logger::init();

    println!("🔍 Демонстрация токенизатора sqltoken\n");

    // Тест 1: Простой запрос с позициями
    show_positions();

    // Тест 2: Потоковый разбор через итератор
    show_iterator();

    // Тест 3: Диалект из переменной окружения
    show_dialect_from_env();

    // Тест 4: Ошибка с частичным результатом
    show_error();

    println!("✅ Демонстрация завершена успешно!");
}

fn show_positions() {
    println!("📝 1. Токены и позиции");
    println!("======================");

    let sql = "SELECT name, N'имя'\n\tFROM users WHERE id >= 10; -- конец";
    let mut tokenizer = Tokenizer::new(sql, &GenericSqlDialect);
    match tokenizer.tokenize() {
        Ok(tokens) => {
            for token in &tokens {
                println!("   {}..{} {:?}: {:?}", token.from, token.to, token.kind, token.text());
            }
            println!("   Конечная позиция: {}", tokenizer.pos());
        }
        Err(e) => println!("   ❌ Ошибка: {}", e),
    }
    println!();
}

fn show_iterator() {
    println!("🔗 2. Значимые токены через итератор");
    println!("====================================");

    let sql = "select a.id::text, b.`name` from a /* join */ join b on a.id <> b.id";
    for token in Tokenizer::new(sql, &MySqlDialect) {
        match token {
            Ok(token) if token.is_trivia() => {}
            Ok(token) => match token.word() {
                Some(word) if word.is_keyword() => println!("   🔑 {}", word),
                Some(word) => println!("   🏷️  {}", word),
                None if token.kind.is_operator() => println!("   🔧 {}", token.value.as_str()),
                None => println!("   {:?}: {}", token.kind, token.value.as_str()),
            },
            Err(e) => {
                println!("   ❌ Ошибка: {}", e);
                break;
            }
        }
    }
    println!();
}

fn show_dialect_from_env() {
    println!("⚙️  3. Диалект из окружения (SQLTOKEN_DIALECT)");
    println!("==============================================");

    let config = match TokenizerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("   ❌ Ошибка конфигурации: {}", e);
            TokenizerConfig::default()
        }
    };
    let dialect = config.build_dialect();
    println!("   Диалект: {}", dialect.name());

    let sql = "select $1, @var, `col` from t";
    match Tokenizer::new(sql, dialect.as_ref()).tokenize() {
        Ok(tokens) => {
            let words = tokens.iter().filter(|t| t.kind == TokenKind::Word).count();
            println!("   Слов: {}", words);
        }
        Err(e) => println!("   ❌ {}", e),
    }
    println!();
}

fn show_error() {
    println!("⚠️  4. Незакрытая строка");
    println!("========================");

    let sql = "select 'не закрыта";
    let (error, tokens) = match Tokenizer::new(sql, &GenericSqlDialect).tokenize() {
        Ok(_) => return,
        Err(e) => e.into_parts(),
    };
    println!("   Ошибка: {}", error);
    if let Some(position) = error.position() {
        println!("   Позиция: {}", position);
    }
    println!("   Разобрано токенов до ошибки: {}", tokens.len());
    println!();
}
