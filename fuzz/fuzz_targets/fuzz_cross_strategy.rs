#![no_main]

use libfuzzer_sys::fuzz_target;

use numcheck_core::driver::{convert, Outcome};
use numcheck_core::options::ConversionOptions;
use numcheck_core::request::ConversionRequest;
use numcheck_core::strategy::{StrategyChoice, StrategyKind};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // Small denominators with a budget large enough for both strategies to
    // reach a verdict.
    let numerator = i64::from(u16::from_le_bytes([data[0], data[1]]));
    let denominator = i64::from(u16::from_le_bytes([data[2], data[3]])) % 4096 + 1;
    let base = i64::from(data[4]) % 35 + 2;
    let budget = usize::try_from(denominator).unwrap() * 4 + 4;

    let request = ConversionRequest::new(numerator, denominator, base);
    let run = |kind| {
        let opts = ConversionOptions::default()
            .with_budget(budget)
            .with_strategy(StrategyChoice::Fixed(kind));
        convert(&request, &opts).unwrap()
    };

    let floyd = run(StrategyKind::TortoiseHare);
    let exact = run(StrategyKind::ExactMembership);

    assert_ne!(exact.outcome, Outcome::Inconclusive);
    assert_eq!(floyd.outcome, exact.outcome, "{numerator}/{denominator} base {base}");
    assert_eq!(floyd.prefix(), exact.prefix());
    assert_eq!(floyd.period(), exact.period());
});
