#![no_main]

use libfuzzer_sys::fuzz_target;
use packlist::core::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(record) = packlist::payload::from_json(s) {
            let header = record.header.clone();
            let totals = record.totals();
            let rows = record.into_rows();
            let _ = validate_submission(&header, &rows, &totals);
        }
    }
});
