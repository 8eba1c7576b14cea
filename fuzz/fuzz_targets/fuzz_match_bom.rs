#![no_main]

use bomsig::{detect_prefix, match_bom};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let exact = match_bom(data).ok();
    if let Some((found, len)) = detect_prefix(data) {
        assert_eq!(match_bom(&data[..len]).ok(), Some(found));
        if len == data.len() {
            assert_eq!(exact, Some(found));
        }
    } else {
        assert!(exact.is_none());
    }
});
