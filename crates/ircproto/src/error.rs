//! Error types for the IRC line decoder.
//!
//! Every failure here is an ordinary value-level decode error. A decoder
//! either returns a complete result or one of these, never both.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// Failed to decode an IRC line.
    #[error("invalid message {string:?}: {cause}")]
    InvalidMessage {
        /// The line that failed to decode.
        string: String,
        /// The underlying decode error.
        #[source]
        cause: MessageParseError,
    },
}

impl ProtocolError {
    /// The decode error behind this protocol error.
    pub fn parse_error(&self) -> &MessageParseError {
        match self {
            ProtocolError::InvalidMessage { cause, .. } => cause,
        }
    }
}

/// Errors encountered when decoding an origin mask (`nick!user@host`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PrefixError {
    /// More than one `!` in the mask.
    #[error("multiple nick/user separators")]
    MultipleNickSeparators,

    /// More than one `@` in the mask.
    #[error("multiple host separators")]
    MultipleHostSeparators,

    /// A `!` followed a `.`.
    #[error("nickname contains dots")]
    DottedNickname,

    /// An `@` followed a `.` with no `!` before it.
    #[error("username contains dots")]
    DottedUsername,

    /// Control character, space or `:` in the mask.
    #[error("reserved characters")]
    ReservedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset within the mask.
        position: usize,
    },

    /// Separators and dots in a combination that names nothing.
    #[error("invalid mask")]
    InvalidMask,
}

/// Errors encountered when decoding an IRC line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The origin prefix failed to decode.
    #[error(transparent)]
    Prefix(#[from] PrefixError),

    /// Prefix was not followed by a space.
    #[error("unterminated origin/prefix")]
    UnterminatedOrigin,

    /// Numeric verb that is not exactly three digits followed by a space.
    #[error("command type is not a valid numeric")]
    InvalidNumeric,

    /// Named verb with a character outside `A-Z` / `a-z`.
    #[error("command type contains invalid characters")]
    InvalidCommand,

    /// No verb where one was expected.
    #[error("missing command type")]
    EmptyCommand,

    /// The line lacks its CR LF terminator.
    #[error("does not end with CRLF")]
    MissingCrlf,
}
