//! Terminal rendering of values, with parens colored by nesting depth.

use colored::*;
use std::fmt::{self, Write};

use crate::primitive::Value;
use crate::token::Token;


fn paren_color(depth: usize) -> (u8, u8, u8) {
    match depth % 6 {
        0 => (0, 255, 204),
        1 => (204, 51, 0),
        2 => (153, 255, 102),
        3 => (153, 102, 255),
        4 => (255, 255, 102),
        _ => (255, 179, 179),
    }
}

pub fn write_value<W: Write>(w: &mut W, value: &Value) -> fmt::Result {
    value.write_list(
        w,
        0,
        &mut |writer, atom, _depth| match atom {
            Value::Symbol(symbol) => write!(writer, "{}", symbol.to_string().italic()),
            Value::Procedure(procedure) => write!(writer, "{}", procedure.to_string().dimmed()),
            _ => write!(writer, "{}", atom),
        },
        &mut |writer, paren, depth| {
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        },
    )
}

pub fn render(value: &Value) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_value(&mut out, value);
    out
}

/// Token echo: `[ap, cons, 1, 2]`.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::from("[");
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match token {
            Token::Assign => out.push('='),
            Token::Value(value) => out.push_str(&render(value)),
        }
    }
    out.push(']');
    out
}
