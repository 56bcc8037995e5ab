//! Adversarial decode fuzzer for Message buffers.
//!
//! Feeds arbitrary bytes to the decoder and checks two properties:
//! - decoding never panics, whatever the input;
//! - any buffer that decodes successfully is canonical: re-encoding the
//!   decoded message reproduces the input byte for byte.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plump_proto::{Message, from_bytes, to_bytes};

fuzz_target!(|data: &[u8]| {
    if let Ok(message) = from_bytes::<Message>(data) {
        let reencoded = to_bytes(&message).expect("re-encoding a decoded message");
        assert_eq!(&reencoded[..], data, "accepted a non-canonical buffer");
    }
});
