#![no_main]
use libfuzzer_sys::fuzz_target;
use senml::SenMLPack;

fuzz_target!(|data: &[u8]| {
    if let Ok(pack) = SenMLPack::from_cbor(data) {
        // Anything we accept must encode again
        let bytes = pack.to_cbor().unwrap();
        let _ = SenMLPack::from_cbor(&bytes);
    }
});
