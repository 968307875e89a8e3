#![no_main]

use ctstat::pattern::match_line;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Matching must never panic, whatever the line contains, and any
        // extracted duration must honor the non-negative finite invariant.
        for line in input.lines() {
            if let Some(sample) = match_line(line) {
                assert!(sample.duration_secs.is_finite());
                assert!(sample.duration_secs >= 0.0);
            }
        }
    }
});
