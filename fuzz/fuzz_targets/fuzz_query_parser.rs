#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing is total: arbitrary input must never panic
    let q = hymnq::query::parse(data);
    // Normalization is idempotent on the residue
    assert_eq!(hymnq::utils::fold_text(&q.text), q.text);
});
