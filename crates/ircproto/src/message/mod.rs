//! IRC line decoding.

mod borrowed;
mod decode;
mod types;

pub use self::borrowed::{Arguments, MessageRef};
pub use self::decode::{CRLF, MAX_ARGUMENTS, MAX_MIDDLE_ARGUMENTS};
pub use self::types::{Message, Payload, VerbKind};
