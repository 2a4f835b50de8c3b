#![no_main]

use libfuzzer_sys::fuzz_target;

use numcheck_core::driver::convert;
use numcheck_core::options::ConversionOptions;
use numcheck_core::request::ConversionRequest;

fuzz_target!(|data: &[u8]| {
    if data.len() < 18 {
        return;
    }
    // Raw i64 fields, so invalid and overflowing requests are reached too.
    let numerator = i64::from_le_bytes(data[0..8].try_into().unwrap());
    let denominator = i64::from_le_bytes(data[8..16].try_into().unwrap());
    let base = i64::from(data[16]);
    let budget = usize::from(data[17]) * 8;

    let request = ConversionRequest::new(numerator, denominator, base);
    let opts = ConversionOptions::default().with_budget(budget);

    // Should not panic
    if let Ok(exp) = convert(&request, &opts) {
        assert!(exp.trace.len() <= budget);
        if let Some(window) = exp.outcome.window() {
            assert!(window.end < exp.trace.len());
        }
    }
});
