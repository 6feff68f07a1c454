//! Сценарии разбора через публичный API

use super::common::*;
use sqltoken::dialect::GenericSqlDialect;
use sqltoken::{Error, Position, Result, Token, TokenKind, TokenValue, Tokenizer, Word};

fn span(token: &Token) -> (Position, Position) {
    (token.from, token.to)
}

fn p(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

#[test]
fn test_minus_between_numbers() -> Result<()> {
    let tokens = tokenize_checked("1-3", &GenericSqlDialect)?;
    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind, t.value.as_str().to_string(), span(t)))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Number, "1".to_string(), (p(1, 0), p(1, 1))),
            (TokenKind::Minus, "-".to_string(), (p(1, 1), p(1, 2))),
            (TokenKind::Number, "3".to_string(), (p(1, 2), p(1, 3))),
        ]
    );
    Ok(())
}

#[test]
fn test_not_equal_operator() -> Result<()> {
    let tokens = tokenize_checked("1!=2", &GenericSqlDialect)?;
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Neq);
    assert_eq!(tokens[1].value, TokenValue::Text("!=".to_string()));
    assert_eq!(span(&tokens[1]), (p(1, 1), p(1, 3)));
    Ok(())
}

#[test]
fn test_single_line_comment() -> Result<()> {
    let tokens = tokenize_checked("-- test", &GenericSqlDialect)?;
    assert_eq!(tokens, vec![Token::new(TokenKind::Comment, " test", p(1, 0), p(1, 7))]);
    Ok(())
}

#[test]
fn test_national_string_literal() -> Result<()> {
    let tokens = tokenize_checked("N'string'", &GenericSqlDialect)?;
    assert_eq!(
        tokens,
        vec![Token::new(TokenKind::NationalStringLiteral, "string", p(1, 0), p(1, 9))]
    );
    Ok(())
}

#[test]
fn test_quoted_keyword_word() -> Result<()> {
    let tokens = tokenize_checked("\"SELECT\"", &GenericSqlDialect)?;
    let expected = Word {
        value: "SELECT".to_string(),
        keyword: Some("SELECT".to_string()),
        quote_style: Some('"'),
    };
    assert_eq!(tokens, vec![Token::new(TokenKind::Word, expected, p(1, 0), p(1, 8))]);
    Ok(())
}

#[test]
fn test_period_never_merges_into_number() -> Result<()> {
    let tokens = tokenize_checked("1.1-.", &GenericSqlDialect)?;
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Minus, TokenKind::Period]);
    assert_eq!(tokens[0].value.as_str(), "1.1");
    Ok(())
}

#[test]
fn test_full_statement_keywords() -> Result<()> {
    let sql = "SELECT u.name, COUNT(o.id) AS order_count\n\
               FROM users u LEFT JOIN orders o ON u.id = o.user_id\n\
               WHERE u.created_at >= '2023-01-01' GROUP BY u.id;";
    let tokens = tokenize_checked(sql, &GenericSqlDialect)?;

    let keywords: Vec<&str> = tokens
        .iter()
        .filter_map(|t| t.word())
        .filter_map(|w| w.keyword())
        .collect();
    assert_eq!(
        keywords,
        vec!["SELECT", "COUNT", "AS", "FROM", "LEFT", "JOIN", "ON", "WHERE", "GROUP", "BY"]
    );

    let identifiers: Vec<&str> = tokens
        .iter()
        .filter_map(|t| t.word())
        .filter(|w| !w.is_keyword())
        .map(|w| w.value.as_str())
        .collect();
    assert!(identifiers.contains(&"order_count"));
    assert!(identifiers.contains(&"users"));

    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Semicolon));
    Ok(())
}

#[test]
fn test_trivia_can_be_filtered() -> Result<()> {
    let tokens = tokenize_checked("select /* c */ 1 -- tail", &GenericSqlDialect)?;
    let significant: Vec<_> = tokens.iter().filter(|t| !t.is_trivia()).collect();
    assert_eq!(significant.len(), 2);
    assert!(significant[0].is_keyword("SELECT"));
    assert_eq!(significant[1].kind, TokenKind::Number);
    Ok(())
}

#[test]
fn test_partial_tokens_on_error() {
    init_logger();
    let mut tokenizer = Tokenizer::new("select a,\n  'open", &GenericSqlDialect);
    let (error, tokens) = tokenizer.tokenize().unwrap_err().into_parts();

    assert!(matches!(error, Error::UnterminatedString { .. }));
    assert!(error.is_lexical());
    assert_eq!(error.position(), Some(p(2, 7)));
    assert_eq!(tokenizer.pos(), p(2, 7));
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word,
            TokenKind::Whitespace,
            TokenKind::Word,
            TokenKind::Comma,
            TokenKind::Whitespace,
            TokenKind::Whitespace,
        ]
    );
}

#[test]
fn test_tokens_serialize_to_json() -> Result<()> {
    let tokens = tokenize_checked("a >= 'x'", &GenericSqlDialect)?;
    let json = serde_json::to_string(&tokens).expect("tokens serialize");
    let back: Vec<Token> = serde_json::from_str(&json).expect("tokens deserialize");
    assert_eq!(back, tokens);
    assert!(json.contains("\"GtEq\""));
    Ok(())
}

#[test]
fn test_reader_and_str_agree() -> Result<()> {
    let sql = "select *\r\nfrom t\twhere x <> N'да'";
    let from_str = tokenize_checked(sql, &GenericSqlDialect)?;
    let from_reader = Tokenizer::from_reader(sql.as_bytes(), &GenericSqlDialect)
        .tokenize()
        .map_err(|e| e.error)?;
    assert_eq!(from_str, from_reader);
    Ok(())
}
