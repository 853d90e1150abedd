//! Origin (message prefix) decoding.
//!
//! The prefix of a line names its sender: `nick!user@host`, `nick@host`,
//! a dotted server name, or a bare token that the caller has to resolve
//! from context.

mod decode;
mod serialize;
mod types;

pub(crate) use self::decode::scan;
pub use self::types::{Origin, OriginKind, OriginRef, UnknownOriginKind};
