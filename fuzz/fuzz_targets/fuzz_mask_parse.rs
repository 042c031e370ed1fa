#![no_main]

use docnum::core::JournalMask;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = JournalMask::parse(data);
});
