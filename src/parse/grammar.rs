use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, cut_err, opt, preceded, separated};
use winnow::error::{ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

use crate::types::Numeric;
use crate::Value;

/// Deepest array/object nesting accepted in a literal.
const MAX_DEPTH: usize = 64;

// -- Whitespace -------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
        .void()
        .parse_next(input)
}

/// Whitespace the host tolerates around a numeric string, which includes
/// vertical tab and form feed on top of the literal whitespace set.
fn numeric_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| {
        matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{b}' | '\u{c}')
    })
    .void()
    .parse_next(input)
}

// -- Numbers ----------------------------------------------------------------

fn number_from_text(text: &str) -> Option<Numeric> {
    if text.contains(['.', 'e', 'E']) {
        text.parse().ok().map(Numeric::Float)
    } else {
        text.parse()
            .map(Numeric::Int)
            .ok()
            .or_else(|| text.parse().ok().map(Numeric::Float))
    }
}

fn exponent(input: &mut &str) -> ModalResult<()> {
    (one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)
        .void()
        .parse_next(input)
}

fn json_number(input: &mut &str) -> ModalResult<Value> {
    (
        opt('-'),
        alt(('0'.void(), (one_of('1'..='9'), digit0).void())),
        opt(('.', digit1)),
        opt(exponent),
    )
        .take()
        .verify_map(number_from_text)
        .map(|n| match n {
            Numeric::Int(i) => Value::Int(i),
            Numeric::Float(f) => Value::Float(f),
        })
        .parse_next(input)
}

/// A host numeric string: optional sign, digits with an optional fraction
/// (or a bare fraction), optional exponent, surrounded by optional whitespace.
pub(super) fn numeric_string(input: &mut &str) -> ModalResult<Numeric> {
    numeric_ws.parse_next(input)?;
    let n = (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt(exponent),
    )
        .take()
        .verify_map(number_from_text)
        .parse_next(input)?;
    numeric_ws.parse_next(input)?;
    Ok(n)
}

// -- Strings ----------------------------------------------------------------

fn hex4(input: &mut &str) -> ModalResult<u32> {
    take_while(4, |c: char| c.is_ascii_hexdigit())
        .try_map(|hex: &str| u32::from_str_radix(hex, 16))
        .parse_next(input)
}

fn unicode_escape(input: &mut &str) -> ModalResult<char> {
    let high = hex4.parse_next(input)?;
    let code = if (0xD800..0xDC00).contains(&high) {
        let low = preceded("\\u", hex4)
            .verify(|low: &u32| (0xDC00..0xE000).contains(low))
            .parse_next(input)?;
        0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
    } else {
        high
    };
    match char::from_u32(code) {
        Some(c) => Ok(c),
        None => Err(ErrMode::from_input(input).cut()),
    }
}

fn escape(input: &mut &str) -> ModalResult<char> {
    alt((
        '"'.value('"'),
        '\\'.value('\\'),
        '/'.value('/'),
        'b'.value('\u{8}'),
        'f'.value('\u{c}'),
        'n'.value('\n'),
        'r'.value('\r'),
        't'.value('\t'),
        preceded('u', unicode_escape),
    ))
    .parse_next(input)
}

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = cut_err(any).parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => s.push(cut_err(escape).parse_next(input)?),
            c if c < ' ' => return Err(ErrMode::from_input(input).cut()),
            c => s.push(c),
        }
    }
}

// -- Compound literals ------------------------------------------------------

fn array(input: &mut &str, depth: usize) -> ModalResult<Value> {
    '['.parse_next(input)?;
    if depth >= MAX_DEPTH {
        return Err(ErrMode::from_input(input).cut());
    }
    let items: Vec<Value> =
        separated(0.., |i: &mut &str| json_value(i, depth + 1), ',').parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(']').parse_next(input)?;
    Ok(Value::List(items))
}

fn member(input: &mut &str, depth: usize) -> ModalResult<(String, Value)> {
    ws.parse_next(input)?;
    let key = string_literal.parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(':').parse_next(input)?;
    let value = cut_err(|i: &mut &str| json_value(i, depth)).parse_next(input)?;
    Ok((key, value))
}

fn object(input: &mut &str, depth: usize) -> ModalResult<Value> {
    '{'.parse_next(input)?;
    if depth >= MAX_DEPTH {
        return Err(ErrMode::from_input(input).cut());
    }
    let members: Vec<(String, Value)> =
        separated(0.., |i: &mut &str| member(i, depth + 1), ',').parse_next(input)?;
    ws.parse_next(input)?;
    cut_err('}').parse_next(input)?;
    Ok(Value::Map(members.into_iter().collect()))
}

fn json_value(input: &mut &str, depth: usize) -> ModalResult<Value> {
    ws.parse_next(input)?;
    let value = alt((
        "null".value(Value::Null),
        "true".value(Value::Bool(true)),
        "false".value(Value::Bool(false)),
        json_number,
        string_literal.map(Value::String),
        |i: &mut &str| array(i, depth),
        |i: &mut &str| object(i, depth),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "literal",
    )))
    .parse_next(input)?;
    ws.parse_next(input)?;
    Ok(value)
}

// -- Top-level parser -------------------------------------------------------

pub(super) fn literal(input: &mut &str) -> ModalResult<Value> {
    json_value(input, 0)
}
