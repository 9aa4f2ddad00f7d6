// Run with: cargo fuzz run fuzz_lead_email
// Looks for panics in email validation on arbitrary UTF-8
#![no_main]

use libfuzzer_sys::fuzz_target;
use newsletter_architect::domain::LeadEmail;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = LeadEmail::parse(s.to_string());
    }
});
