#![no_main]

use libfuzzer_sys::fuzz_target;
use say_prob::weighted::{self, RatePrior, WeightStats};

fuzz_target!(|data: &[u8]| {
    if data.len() < 18 {
        return;
    }

    let k = u16::from_le_bytes([data[0], data[1]]) as u64;
    let s1 = f64::from_le_bytes(data[2..10].try_into().unwrap());
    let s2 = f64::from_le_bytes(data[10..18].try_into().unwrap());

    for prior in [RatePrior::MeanMatched, RatePrior::ModeMatched, RatePrior::Uninformed] {
        // Must never panic, whatever the statistics.
        let result = weighted::logpmf(k, WeightStats::new(s1, s2), prior);

        // In a well-conditioned box the result is a number (possibly -inf),
        // never NaN. Outside it, term overflow may surface as an Err or as
        // inf arithmetic; only the no-panic guarantee applies there.
        let conditioned =
            s1.is_finite() && s2.is_finite() && s1.abs() <= 1e12 && (s2 == 0.0 || s2 >= 1e-12);
        if conditioned {
            if let Ok(ll) = result {
                assert!(!ll.is_nan(), "NaN for k={}, s1={}, s2={}, {:?}", k, s1, s2, prior);
            }
        }
    }
});
