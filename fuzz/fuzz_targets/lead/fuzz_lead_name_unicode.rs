// Run with: cargo fuzz run fuzz_lead_name_unicode
// Grapheme counting on invalid UTF-8, combining characters and RTL text
#![no_main]

use libfuzzer_sys::fuzz_target;
use newsletter_architect::domain::LeadName;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data).to_string();

    let _ = LeadName::parse(input);
});
