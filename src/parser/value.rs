use super::*;
use crate::value::Value;

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value> {
    match parser.current().kind {
        TokenKind::String => Ok(parse_string_value(parser)),
        TokenKind::Integer => parse_integer_value(parser),
        TokenKind::Float => parse_float_value(parser),
        TokenKind::Boolean => Ok(parse_bool_value(parser)),
        TokenKind::LeftBrace => document::parse_group(parser),
        TokenKind::LeftBracket => parse_array_value(parser),
        TokenKind::LeftParen => parse_list_value(parser),
        _ => Err(parser.unexpected("value")),
    }
}

/// Adjacent string literals join into one value.
fn parse_string_value(parser: &mut Parser) -> Value {
    let mut s = parser.advance().value;
    while parser.at(TokenKind::String) {
        s.push_str(&parser.advance().value);
    }
    Value::String(s)
}

fn parse_integer_value(parser: &mut Parser) -> Result<Value> {
    let token = parser.advance();
    parse_integer_literal(&token.value).map_err(|e| ConfigError::InvalidInteger {
        literal: token.value.clone(),
        reason: e.to_string(),
        line: token.line,
        column: token.column,
    })
}

fn parse_float_value(parser: &mut Parser) -> Result<Value> {
    let token = parser.advance();
    token
        .value
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|e| ConfigError::InvalidFloat {
            literal: token.value.clone(),
            reason: e.to_string(),
            line: token.line,
            column: token.column,
        })
}

fn parse_bool_value(parser: &mut Parser) -> Value {
    let token = parser.advance();
    Value::Bool(token.value.eq_ignore_ascii_case("true"))
}

fn parse_array_value(parser: &mut Parser) -> Result<Value> {
    parser.expect(TokenKind::LeftBracket)?;
    let elements = parse_elements(parser, TokenKind::RightBracket, true)?;
    Ok(Value::Array(elements))
}

fn parse_list_value(parser: &mut Parser) -> Result<Value> {
    parser.expect(TokenKind::LeftParen)?;
    let elements = parse_elements(parser, TokenKind::RightParen, false)?;
    Ok(Value::List(elements))
}

/// Comma-separated values up to and including `close`. A trailing comma is allowed.
///
/// With `homogeneous`, every element must have the kind of the first one.
fn parse_elements(parser: &mut Parser, close: TokenKind, homogeneous: bool) -> Result<Vec<Value>> {
    let mut elements: Vec<Value> = Vec::new();

    if parser.at(close) {
        parser.advance();
        return Ok(elements);
    }

    loop {
        let (line, column) = (parser.current().line, parser.current().column);
        let element = parse_value(parser)?;

        if homogeneous {
            if let Some(first) = elements.first() {
                if first.kind() != element.kind() {
                    return Err(ConfigError::ArrayTypeMismatch {
                        expected: first.kind(),
                        found: element.kind(),
                        line,
                        column,
                    });
                }
            }
        }
        elements.push(element);

        if !parser.at(TokenKind::Comma) {
            break;
        }
        parser.advance();

        if parser.at(close) {
            break;
        }
    }

    parser.expect(close)?;
    Ok(elements)
}
