//! Line decoder.
//!
//! ```text
//! message   = [ ":" prefix SPACE ] verb SPACE [ params ] CRLF
//! verb      = 3DIGIT / 1*ALPHA
//! params    = *13( SPACE middle ) [ SPACE trailing ]
//! ```
//!
//! Once 14 middle parameters have been read, the rest of the line is taken
//! verbatim as the 15th, with or without a leading `:`.

use nom::{
    bytes::complete::{take_till, take_while, take_while_m_n},
    character::complete::char,
    sequence::{preceded, terminated},
    IResult,
};
use smallvec::SmallVec;

use super::borrowed::{Arguments, MessageRef};
use crate::error::MessageParseError;
use crate::origin::{scan, OriginRef};

/// Maximum number of arguments on one line.
pub const MAX_ARGUMENTS: usize = 15;

/// Number of space-delimited arguments read before the rest of the line is
/// taken as the last one.
pub const MAX_MIDDLE_ARGUMENTS: usize = MAX_ARGUMENTS - 1;

/// Line terminator.
pub const CRLF: &str = "\r\n";

/// `:` prefix up to, and consuming, the separating space.
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    terminated(preceded(char(':'), take_till(|c: char| c == ' ')), char(' '))(input)
}

/// Three digits and a space.
fn parse_numeric(input: &str) -> IResult<&str, &str> {
    terminated(take_while_m_n(3, 3, |c: char| c.is_ascii_digit()), char(' '))(input)
}

/// Letters and a space.
fn parse_named(input: &str) -> IResult<&str, &str> {
    terminated(take_while(|c: char| c.is_ascii_alphabetic()), char(' '))(input)
}

fn decode_verb(input: &str) -> Result<(&str, &str), MessageParseError> {
    match input.chars().next() {
        Some(c) if c.is_ascii_digit() => {
            parse_numeric(input).map_err(|_| MessageParseError::InvalidNumeric)
        }
        None | Some(' ') => Err(MessageParseError::EmptyCommand),
        Some(_) => match parse_named(input) {
            Ok((_, "")) => Err(MessageParseError::EmptyCommand),
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(MessageParseError::InvalidCommand),
        },
    }
}

/// Split the text after the verb into arguments.
///
/// At each character, in order: a `:` makes the rest of the line (minus
/// CR LF) the final argument, a CR ends the current token as the final
/// argument, 14 completed arguments make the rest of the line the 15th, and
/// a space completes the current token.
fn split_arguments(rest: &str) -> Arguments<'_> {
    let body = rest.strip_suffix(CRLF).unwrap_or(rest);
    let mut arguments: Arguments<'_> = SmallVec::new();
    let mut start = 0;

    for (position, ch) in rest.char_indices() {
        if ch == ':' {
            arguments.push(&body[position + 1..]);
            break;
        }
        if ch == '\r' {
            arguments.push(&rest[start..position]);
            break;
        }
        if arguments.len() == MAX_MIDDLE_ARGUMENTS {
            arguments.push(&body[start..]);
            break;
        }
        if ch == ' ' {
            arguments.push(&rest[start..position]);
            start = position + 1;
        }
    }

    arguments
}

/// Decode one CR LF terminated line.
pub(crate) fn decode_line(line: &str) -> Result<MessageRef<'_>, MessageParseError> {
    let (rest, origin) = if line.starts_with(':') {
        let (rest, mask) =
            parse_prefix(line).map_err(|_| MessageParseError::UnterminatedOrigin)?;
        (rest, scan(mask)?)
    } else {
        (line, OriginRef::default())
    };

    let (rest, verb) = decode_verb(rest)?;
    let arguments = split_arguments(rest);

    if !line.ends_with(CRLF) {
        return Err(MessageParseError::MissingCrlf);
    }

    Ok(MessageRef {
        origin,
        verb,
        arguments,
        raw: line,
    })
}
