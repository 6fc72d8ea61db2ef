#![no_main]
use libfuzzer_sys::fuzz_target;
use zsvg::{from_bytes_with_config, AsElement, Config};

fuzz_target!(|data: &[u8]| {
    if let Ok(parsed) = from_bytes_with_config(data, Config::default()) {
        let _ = parsed.root.count();
        let _ = parsed.root.element();
    }
});
