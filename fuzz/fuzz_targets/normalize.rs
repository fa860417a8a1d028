#![no_main]
use libfuzzer_sys::fuzz_target;
use senml::codec::{self, Format, Options};
use senml::FixedClock;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let format = Format::ALL[usize::from(selector) % Format::ALL.len()];

    if let Ok(mut pack) = codec::decode_validated(format, payload, &Options::default()) {
        let count = pack.len();
        pack.normalize_with(&FixedClock(1_700_000_000.0));
        assert_eq!(pack.len(), count);
    }
});
