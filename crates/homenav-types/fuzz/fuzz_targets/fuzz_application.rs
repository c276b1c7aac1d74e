#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(app) = serde_json::from_str::<homenav_types::Application>(s)
    {
        let _ = app.icon.as_ref().map(homenav_types::AppIcon::display_src);
    }
});
