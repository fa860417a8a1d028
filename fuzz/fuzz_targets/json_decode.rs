#![no_main]
use libfuzzer_sys::fuzz_target;
use senml::SenMLPack;

fuzz_target!(|data: &[u8]| {
    if let Ok(pack) = SenMLPack::from_json_bytes(data) {
        let _ = pack.validate();
        let _ = pack.to_json();
    }
});
