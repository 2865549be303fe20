#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Malformed documents must error, never panic
    let _ = hymnq::document::xml::parse_hymnal(data);
});
