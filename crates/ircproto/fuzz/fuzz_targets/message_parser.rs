//! Fuzz target for IRC line decoding
//!
//! Feeds arbitrary input to both the owned and the borrowed decoder. Neither
//! may panic, and both must agree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 8191 {
            return;
        }

        let owned = ircproto::Message::decode(input);
        let borrowed = ircproto::MessageRef::decode(input).map(|msg| msg.to_owned());
        assert_eq!(owned, borrowed);

        if let Ok(msg) = owned {
            assert!(msg.arguments.len() <= ircproto::MAX_ARGUMENTS);
        }
    }
});
