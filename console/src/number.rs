//! Number entry
//!
//! Tolerant parser for integers typed on the console. The base comes from
//! the prefix: `0x` hex, `0b` binary, `0` followed by an octal digit is octal,
//! anything else is decimal and may carry a leading `-`.
//!
//! Parsing stops at the first character that is not a digit of the chosen
//! base and returns what was accumulated so far. Nothing is reported as an
//! error, so 0 means either a typed zero or unparseable input.
//!
//! Letters are folded by clearing bit 5, so `@` and `` ` `` also count as
//! the digit 9: `"1@"` parses as 19.

use crate::console::Console;

/// Bytes considered by the parser; room for `0b` plus 32 binary digits
pub const NUMBER_SCAN_LEN: usize = 40;

/// Parse a line as produced by [`Console::gets`].
///
/// Only the first [`NUMBER_SCAN_LEN`] bytes are looked at, and a NUL ends the
/// input early. Arithmetic wraps at 32 bits.
pub fn parse_number(line: &[u8]) -> i32 {
    let line = &line[..line.len().min(NUMBER_SCAN_LEN)];
    let end = line.iter().position(|&c| c == 0).unwrap_or(line.len());
    let mut rest = &line[..end];

    let mut base = 10;
    let mut negative = false;

    match rest.first() {
        Some(b'-') => {
            negative = true;
            rest = &rest[1..];
        }
        Some(b'0') => {
            rest = &rest[1..];
            match rest.first() {
                Some(b'b') => {
                    base = 2;
                    rest = &rest[1..];
                }
                Some(b'x') => {
                    base = 16;
                    rest = &rest[1..];
                }
                Some(b'0'..=b'7') => base = 8,
                None => return 0,
                Some(_) => {}
            }
        }
        _ => {}
    }

    let mut value: u32 = 0;
    for &c in rest {
        let digit = digit_value(c);
        if digit >= base {
            break;
        }
        value = value.wrapping_mul(base).wrapping_add(digit);
    }

    if negative {
        value.wrapping_neg() as i32
    } else {
        value as i32
    }
}

/// ASCII digit or letter to its value; letters fold to upper case.
/// Anything else lands far above 15.
fn digit_value(c: u8) -> u32 {
    let value = if c > b'9' {
        (c & 0xdf).wrapping_sub(b'A' - 10)
    } else {
        c.wrapping_sub(b'0')
    };
    u32::from(value)
}

impl Console {
    /// Read a line from the console and parse it as a number
    pub fn getnumber(&self) -> i32 {
        let mut line = [0u8; NUMBER_SCAN_LEN];
        if self.gets(&mut line, NUMBER_SCAN_LEN) == 0 {
            return 0;
        }
        parse_number(&line)
    }
}
