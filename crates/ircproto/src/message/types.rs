use std::str::FromStr;

use super::borrowed::MessageRef;
use crate::error::{MessageParseError, ProtocolError};
use crate::origin::{Origin, OriginKind};

/// Lexical shape of a verb.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerbKind {
    /// A three-digit reply code.
    Numeric(u16),
    /// An alphabetic command name.
    Named,
}

impl VerbKind {
    /// Classify a verb token that has already been validated.
    pub fn of(verb: &str) -> Self {
        if verb.starts_with(|c: char| c.is_ascii_digit()) {
            verb.parse().map_or(VerbKind::Named, VerbKind::Numeric)
        } else {
            VerbKind::Named
        }
    }
}

/// Command-specific data carried by a message.
///
/// Decoding never interprets commands, so every decoded message carries
/// [`Payload::Unrecognized`]. New variants are added per command shape.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Payload {
    /// No command-specific decoding was done.
    #[default]
    Unrecognized,
}

/// An owned, decoded IRC line.
///
/// # Example
///
/// ```
/// use ircproto::{Message, OriginKind};
///
/// let msg = Message::decode("PING :BOOP\r\n").unwrap();
/// assert_eq!(msg.origin.kind, OriginKind::None);
/// assert_eq!(msg.verb, "PING");
/// assert_eq!(msg.arguments, vec!["BOOP"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Sender; kind `None` when the line had no prefix.
    pub origin: Origin,
    /// The raw verb token: three digits or letters.
    pub verb: String,
    /// Up to 15 arguments. Only the last may contain spaces.
    pub arguments: Vec<String>,
    /// Command-specific data.
    pub payload: Payload,
}

impl Message {
    /// Decode a CR LF terminated line.
    ///
    /// Either the whole line decodes or an error is returned; no partially
    /// filled message is produced.
    pub fn decode(line: &str) -> Result<Message, MessageParseError> {
        MessageRef::decode(line).map(|msg| msg.to_owned())
    }

    /// Lexical shape of the verb.
    pub fn verb_kind(&self) -> VerbKind {
        VerbKind::of(&self.verb)
    }

    /// All arguments.
    pub fn args(&self) -> &[String] {
        &self.arguments
    }

    /// Get a specific argument by index.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    /// Get the nickname from a user origin.
    pub fn source_nickname(&self) -> Option<&str> {
        match self.origin.kind {
            OriginKind::User => self.origin.nick(),
            _ => None,
        }
    }
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        Message::decode(s).map_err(|cause| ProtocolError::InvalidMessage {
            string: s.to_owned(),
            cause,
        })
    }
}

impl TryFrom<&str> for Message {
    type Error = MessageParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Message::decode(s)
    }
}
