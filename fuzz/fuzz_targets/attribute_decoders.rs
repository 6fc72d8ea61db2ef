#![no_main]
use libfuzzer_sys::fuzz_target;
use zsvg::svg::decode;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = decode::points(s);
        let _ = decode::style(Some(s));
        let _ = decode::number(Some(s));
    }
});
