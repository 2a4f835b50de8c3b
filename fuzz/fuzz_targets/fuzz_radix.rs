#![no_main]

use libfuzzer_sys::fuzz_target;

use numcheck_core::radix::{convert_integer, parse_digits, to_value};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let from = i64::from(data[0]) % 40;
    let to = i64::from(data[1]) % 40;
    let Ok(input) = std::str::from_utf8(&data[2..]) else {
        return;
    };

    // Should not panic; a successful conversion must convert back.
    if let Ok(converted) = convert_integer(input, from, to) {
        let original = parse_digits(input, from).and_then(|d| to_value(&d, from));
        let back = parse_digits(&converted, to).and_then(|d| to_value(&d, to));
        if converted.len() <= 12 {
            assert_eq!(original, back);
        }
    }
});
