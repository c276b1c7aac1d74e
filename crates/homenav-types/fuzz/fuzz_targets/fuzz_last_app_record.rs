#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Session storage may hold anything; parsing must never panic
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<homenav_types::LastApplicationRecord>(s);
    }
});
