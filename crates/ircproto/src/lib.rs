//! # ircproto
//!
//! Decoder for single IRC protocol lines and for the `nick!user@host`
//! origin notation they carry.
//!
//! Both decoders are pure functions: hand in one complete line (CR LF
//! included) or one mask, get back a value or an error. Nothing is cached
//! and nothing is shared between calls.
//!
//! ## Decoding a line
//!
//! ```rust
//! use ircproto::{Message, OriginKind};
//!
//! let raw = ":OtherUser!foo@second.client.test PRIVMSG TestUser :This is a message. Boo!\r\n";
//! let msg = Message::decode(raw).expect("valid IRC line");
//!
//! assert_eq!(msg.origin.kind, OriginKind::User);
//! assert_eq!(msg.origin.nick, "OtherUser");
//! assert_eq!(msg.verb, "PRIVMSG");
//! assert_eq!(msg.arguments, vec!["TestUser", "This is a message. Boo!"]);
//! ```
//!
//! ## Decoding an origin
//!
//! ```rust
//! use ircproto::{Origin, OriginKind, PrefixError};
//!
//! assert_eq!(Origin::decode("irc.example.com").unwrap().kind, OriginKind::Server);
//! assert_eq!(Origin::decode("x!x!foo@test"), Err(PrefixError::MultipleNickSeparators));
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `debug` events for rejected input.
//! - `serde`: `Serialize`/`Deserialize` for the decoded types.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod message;
pub mod origin;

pub use self::error::{MessageParseError, PrefixError, ProtocolError, Result};
pub use self::message::{
    Message, MessageRef, Payload, VerbKind, MAX_ARGUMENTS, MAX_MIDDLE_ARGUMENTS,
};
pub use self::origin::{Origin, OriginKind, OriginRef};
