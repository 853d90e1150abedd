//! Zero-copy borrowed message type.
//!
//! # Example
//!
//! ```
//! use ircproto::message::MessageRef;
//!
//! let raw = ":nick!user@host PRIVMSG #channel :Hello!\r\n";
//! let msg = MessageRef::decode(raw).unwrap();
//!
//! assert_eq!(msg.verb, "PRIVMSG");
//! assert_eq!(msg.source_nickname(), Some("nick"));
//! assert_eq!(msg.args(), &["#channel", "Hello!"]);
//! ```

use smallvec::SmallVec;

use super::decode::{decode_line, MAX_ARGUMENTS};
use super::types::{Message, Payload, VerbKind};
use crate::error::MessageParseError;
use crate::origin::{OriginKind, OriginRef};

/// Argument storage; never spills for a well-formed line.
pub type Arguments<'a> = SmallVec<[&'a str; MAX_ARGUMENTS]>;

/// A decoded IRC line that borrows from its input.
///
/// Use this when inspecting lines in a tight loop; call
/// [`MessageRef::to_owned`] to keep one around.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MessageRef<'a> {
    /// Sender; kind `None` when the line had no prefix.
    pub origin: OriginRef<'a>,
    /// The raw verb token.
    pub verb: &'a str,
    /// Up to 15 arguments.
    pub arguments: Arguments<'a>,
    /// The full input line, terminator included.
    pub raw: &'a str,
}

impl<'a> MessageRef<'a> {
    /// Decode a CR LF terminated line without allocating.
    #[must_use = "decoding result should be handled"]
    pub fn decode(line: &'a str) -> Result<MessageRef<'a>, MessageParseError> {
        let result = decode_line(line);
        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(msg) => tracing::trace!(
                    verb = msg.verb,
                    origin = %msg.origin.kind,
                    args = msg.arguments.len(),
                    "decoded line"
                ),
                Err(err) => tracing::debug!(error = %err, len = line.len(), "rejected line"),
            }
        }
        result
    }

    /// Lexical shape of the verb.
    #[inline]
    pub fn verb_kind(&self) -> VerbKind {
        VerbKind::of(self.verb)
    }

    /// All arguments.
    #[inline]
    pub fn args(&self) -> &[&'a str] {
        &self.arguments
    }

    /// Get a specific argument by index.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.arguments.get(index).copied()
    }

    /// Nickname of a user origin.
    pub fn source_nickname(&self) -> Option<&'a str> {
        match self.origin.kind {
            OriginKind::User if !self.origin.nick.is_empty() => Some(self.origin.nick),
            _ => None,
        }
    }

    /// Convert to an owned [`Message`].
    pub fn to_owned(&self) -> Message {
        Message {
            origin: self.origin.to_owned(),
            verb: self.verb.to_owned(),
            arguments: self.arguments.iter().map(|arg| (*arg).to_owned()).collect(),
            payload: Payload::Unrecognized,
        }
    }
}

impl From<MessageRef<'_>> for Message {
    fn from(msg: MessageRef<'_>) -> Self {
        msg.to_owned()
    }
}
