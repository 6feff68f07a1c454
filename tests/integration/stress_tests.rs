//! Нагрузочные тесты токенизатора

use super::common::*;
use sqltoken::dialect::{GenericSqlDialect, PostgreSqlDialect};
use sqltoken::{Position, Result, TokenKind, Tokenizer};
use std::time::Instant;

/// Генерирует скрипт из множества операторов
fn generate_script(statements: usize) -> String {
    let mut script = String::new();
    for i in 0..statements {
        match i % 4 {
            0 => script.push_str(&format!(
                "INSERT INTO users (id, name) VALUES ({}, 'user_{}');\n",
                i, i
            )),
            1 => script.push_str(&format!(
                "SELECT * FROM users WHERE id >= {} AND score <> {}.5; -- q{}\r\n",
                i, i, i
            )),
            2 => script.push_str(&format!(
                "\tUPDATE users SET name = N'имя {}' /* multi\nline */ WHERE id = {};\n",
                i, i
            )),
            _ => script.push_str(&format!("DELETE FROM \"Users\" WHERE id::text != '{}';\n", i)),
        }
    }
    script
}

#[test]
fn test_large_script_is_contiguous() -> Result<()> {
    let statements = 2_000;
    let script = generate_script(statements);

    let start = Instant::now();
    let tokens = tokenize_checked(&script, &GenericSqlDialect)?;
    let elapsed = start.elapsed();
    log::info!("{} токенов за {:?}", tokens.len(), elapsed);

    let semicolons = tokens.iter().filter(|t| t.kind == TokenKind::Semicolon).count();
    assert_eq!(semicolons, statements);

    // Каждый четвертый оператор добавляет строку внутри блочного комментария
    let lines = statements + statements / 4;
    assert_eq!(tokens.last().map(|t| t.to), Some(Position::new(lines + 1, 0)));
    Ok(())
}

#[test]
fn test_large_script_from_reader() -> Result<()> {
    let script = generate_script(500);
    let from_str = tokenize_checked(&script, &PostgreSqlDialect)?;

    let mut tokenizer = Tokenizer::from_reader(script.as_bytes(), &PostgreSqlDialect);
    let mut streamed = Vec::new();
    while let Some(token) = tokenizer.next_token()? {
        streamed.push(token);
    }
    assert!(tokenizer.is_done());
    assert_eq!(streamed, from_str);
    Ok(())
}

#[test]
fn test_long_single_tokens() -> Result<()> {
    let identifier = "x".repeat(10_000);
    let literal = "ab''".repeat(5_000);
    let comment = "-".repeat(10_000);
    let sql = format!("{} '{}' /*{}*/", identifier, literal, comment);

    let tokens = tokenize_checked(&sql, &GenericSqlDialect)?;
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].word().map(|w| w.value.len()), Some(10_000));
    assert_eq!(tokens[2].value.as_str().len(), 15_000);
    assert_eq!(tokens[4].kind, TokenKind::Comment);
    assert_eq!(tokens[4].value.as_str(), comment);
    Ok(())
}

#[test]
fn test_iterator_stops_after_error() {
    init_logger();
    let mut sql = generate_script(100);
    sql.push_str("SELECT 'never closed");

    let results: Vec<_> = Tokenizer::new(&sql, &GenericSqlDialect).collect();
    let (last, ok) = results.split_last().expect("at least one item");
    assert!(ok.iter().all(|r| r.is_ok()));
    assert!(last.is_err());
}
