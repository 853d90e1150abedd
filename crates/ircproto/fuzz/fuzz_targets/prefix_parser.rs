//! Fuzz target for origin mask decoding

#![no_main]

use ircproto::{Origin, OriginKind};
use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 256 {
            return;
        }

        if let Ok(origin) = Origin::decode(input) {
            assert_ne!(origin.kind, OriginKind::None);
            assert!(input.ends_with(&origin.host));
            assert!(input.starts_with(&origin.nick));
        }
    }
});
