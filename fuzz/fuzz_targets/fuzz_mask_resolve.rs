#![no_main]

use chrono::NaiveDate;
use docnum::core::JournalMask;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(mask) = JournalMask::parse(data) {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let resolved = mask.resolve(date);
        // Composing must put the counter inside the base's split point.
        let composed = resolved.compose("123");
        assert_eq!(composed.len(), resolved.base().len() + 3);
    }
});
