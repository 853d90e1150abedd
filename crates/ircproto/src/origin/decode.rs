//! Single-pass origin mask scanner.

use super::types::{OriginKind, OriginRef};
use crate::error::PrefixError;

/// Characters that may never appear in an origin mask.
#[inline]
pub(crate) fn is_reserved(ch: char) -> bool {
    ch.is_control() || ch == ' ' || ch == ':'
}

/// Scan `mask` once, left to right, and classify it.
///
/// The dot count is never reset, so a dot anywhere before an `@` is an
/// error unless a `!` came first.
pub(crate) fn scan(mask: &str) -> Result<OriginRef<'_>, PrefixError> {
    let mut bang: Option<usize> = None;
    let mut at: Option<usize> = None;
    let mut dots = 0usize;

    for (position, ch) in mask.char_indices() {
        match ch {
            '!' => {
                if bang.is_some() {
                    return Err(PrefixError::MultipleNickSeparators);
                }
                if dots > 0 {
                    return Err(PrefixError::DottedNickname);
                }
                bang = Some(position);
            }
            '@' => {
                if at.is_some() {
                    return Err(PrefixError::MultipleHostSeparators);
                }
                if dots > 0 && bang.is_none() {
                    return Err(PrefixError::DottedUsername);
                }
                at = Some(position);
            }
            '.' => dots += 1,
            ch if is_reserved(ch) => {
                return Err(PrefixError::ReservedCharacter { ch, position });
            }
            _ => {}
        }
    }

    let origin = match (bang, at) {
        (Some(bang), Some(at)) if bang < at => OriginRef {
            kind: OriginKind::User,
            nick: &mask[..bang],
            username: &mask[bang + 1..at],
            host: &mask[at + 1..],
        },
        (None, Some(at)) => OriginRef {
            kind: OriginKind::User,
            nick: &mask[..at],
            username: "",
            host: &mask[at + 1..],
        },
        (None, None) if dots > 0 => OriginRef {
            kind: OriginKind::Server,
            nick: "",
            username: "",
            host: mask,
        },
        (None, None) => OriginRef {
            kind: OriginKind::Unknown,
            nick: mask,
            username: "",
            host: mask,
        },
        // `!` without `@`, or `!` after `@`
        _ => return Err(PrefixError::InvalidMask),
    };

    Ok(origin)
}
