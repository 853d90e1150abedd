//! Origin types.
//!
//! An origin identifies the sender of a line: a user's `nick!user@host`
//! mask, a server name, or a bare token that could be either.
//!
//! # Reference
//! - RFC 1459 Section 2.3.1: Message format

use std::fmt;
use std::str::FromStr;

use super::decode::scan;
use crate::error::PrefixError;

/// Classification of a decoded origin.
///
/// This is the only place origin kinds are named; [`OriginKind::as_str`],
/// `Display`, `FromStr` and the serde representation all share one mapping.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OriginKind {
    /// The line carried no prefix.
    #[default]
    None,
    /// `nick[!user]@host`.
    User,
    /// A single dotted token.
    Server,
    /// A single token with no separators and no dots. Whether it names a
    /// user or a server depends on the connection's role.
    Unknown,
}

impl OriginKind {
    /// All kinds, in declaration order.
    pub const ALL: [OriginKind; 4] = [
        OriginKind::None,
        OriginKind::User,
        OriginKind::Server,
        OriginKind::Unknown,
    ];

    /// Returns the kind's canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::User => "User",
            Self::Server => "Server",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not an origin kind label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown origin kind: {0}")]
pub struct UnknownOriginKind(pub String);

impl FromStr for OriginKind {
    type Err = UnknownOriginKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OriginKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownOriginKind(s.to_owned()))
    }
}

/// An owned, decoded origin.
///
/// Fields are populated according to [`OriginKind`]:
///
/// | kind      | nick        | username     | host         |
/// |-----------|-------------|--------------|--------------|
/// | `None`    | empty       | empty        | empty        |
/// | `User`    | before `!`/`@` | between `!` and `@` (or empty) | after `@` |
/// | `Server`  | empty       | empty        | whole mask   |
/// | `Unknown` | whole mask  | empty        | whole mask   |
///
/// # Example
///
/// ```
/// use ircproto::{Origin, OriginKind};
///
/// let origin = Origin::decode("nick!user@host.example.com").unwrap();
/// assert_eq!(origin.kind, OriginKind::User);
/// assert_eq!(origin.nick(), Some("nick"));
/// assert_eq!(origin.username(), Some("user"));
/// assert_eq!(origin.host(), Some("host.example.com"));
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    /// How the mask was classified.
    pub kind: OriginKind,
    /// Nickname, if any.
    pub nick: String,
    /// Username (ident), if any.
    pub username: String,
    /// Hostname or server name, if any.
    pub host: String,
}

impl Origin {
    /// The origin of a line that had no prefix.
    pub fn none() -> Self {
        Self::default()
    }

    /// Decode an origin mask.
    ///
    /// Fails atomically; no partially filled origin is ever returned.
    pub fn decode(mask: &str) -> Result<Self, PrefixError> {
        OriginRef::decode(mask).map(|origin| origin.to_owned())
    }

    /// True for `nick[!user]@host` origins.
    pub fn is_user(&self) -> bool {
        self.kind == OriginKind::User
    }

    /// True for dotted server-name origins.
    pub fn is_server(&self) -> bool {
        self.kind == OriginKind::Server
    }

    /// Get the nickname, if populated.
    pub fn nick(&self) -> Option<&str> {
        non_empty(&self.nick)
    }

    /// Get the username, if populated.
    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    /// Get the host or server name, if populated.
    pub fn host(&self) -> Option<&str> {
        non_empty(&self.host)
    }
}

impl FromStr for Origin {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Origin::decode(s)
    }
}

impl TryFrom<&str> for Origin {
    type Error = PrefixError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Origin::decode(s)
    }
}

/// A borrowed origin whose fields point into the decoded mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OriginRef<'a> {
    /// How the mask was classified.
    pub kind: OriginKind,
    /// Nickname, or empty.
    pub nick: &'a str,
    /// Username, or empty.
    pub username: &'a str,
    /// Hostname or server name, or empty.
    pub host: &'a str,
}

impl<'a> OriginRef<'a> {
    /// Decode an origin mask without allocating.
    pub fn decode(mask: &'a str) -> Result<Self, PrefixError> {
        let result = scan(mask);
        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &result {
                tracing::debug!(error = %err, len = mask.len(), "rejected origin mask");
            }
        }
        result
    }

    /// Convert to an owned [`Origin`].
    pub fn to_owned(self) -> Origin {
        Origin {
            kind: self.kind,
            nick: self.nick.to_owned(),
            username: self.username.to_owned(),
            host: self.host.to_owned(),
        }
    }
}

impl From<OriginRef<'_>> for Origin {
    fn from(origin: OriginRef<'_>) -> Self {
        origin.to_owned()
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
