use super::*;
use crate::value::Value;

/// Parse settings and includes into `target` until `terminator` (or end of input).
///
/// The top level and the inside of `{ }` share this grammar.
pub(super) fn parse_settings(
    parser: &mut Parser,
    target: &mut IndexMap<String, Value>,
    terminator: TokenKind,
) -> Result<()> {
    while !parser.at(terminator) && !parser.at(TokenKind::Eof) {
        if parser.at(TokenKind::Include) {
            include::parse_include(parser, target)?;
            continue;
        }

        let (name, value) = parse_setting(parser)?;
        // Redefinition replaces the earlier value.
        target.insert(name, value);

        parser.skip(TokenKind::Semicolon);
    }
    Ok(())
}

/// `name = value` or `name : value`.
fn parse_setting(parser: &mut Parser) -> Result<(String, Value)> {
    if !parser.at(TokenKind::Identifier) {
        return Err(parser.unexpected("setting name"));
    }
    let name = parser.advance().value;

    if !parser.at(TokenKind::Assign) {
        return Err(parser.unexpected("'=' or ':'"));
    }
    parser.advance();

    let value = value::parse_value(parser)?;
    log::trace!("setting '{}' = {}", name, value.type_name());
    Ok((name, value))
}

pub(super) fn parse_group(parser: &mut Parser) -> Result<Value> {
    parser.expect(TokenKind::LeftBrace)?;

    let mut entries = IndexMap::new();
    parse_settings(parser, &mut entries, TokenKind::RightBrace)?;

    parser.expect(TokenKind::RightBrace)?;
    Ok(Value::Group(entries))
}
