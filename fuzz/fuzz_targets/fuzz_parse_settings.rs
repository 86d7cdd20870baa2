#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz legacy settings extraction - this should never panic
        let _ = migrate_config::parse_settings(content);
    }
});
