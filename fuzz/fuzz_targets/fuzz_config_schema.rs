#![no_main]

use libfuzzer_sys::fuzz_target;
use storydoc::config::Config;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml) = std::str::from_utf8(data) {
        if let Ok(config) = serde_yaml::from_str::<Config>(yaml) {
            let _ = config.validate();
        }
    }
});
