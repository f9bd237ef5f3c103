#![no_main]

use libfuzzer_sys::fuzz_target;
use storydoc::mdx::{StripOptions, strip_mdx};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let options = StripOptions { max_tag_passes: 8 };
        let out = strip_mdx(source, &options);
        // Fence placeholders never leak into the output.
        if !source.contains('\0') {
            assert!(!out.contains('\0'));
        }
    }
});
