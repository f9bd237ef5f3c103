#![no_main]

use libfuzzer_sys::fuzz_target;
use storydoc::catalog::extract_tags;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        for tag in extract_tags(source) {
            assert!(!tag.is_empty());
            assert_eq!(tag.trim(), tag);
        }
    }
});
