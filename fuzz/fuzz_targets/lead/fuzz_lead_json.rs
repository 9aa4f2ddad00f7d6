// Run with: cargo fuzz run fuzz_lead_json
// JSON -> LeadData -> TryFrom<LeadData> for Lead
#![no_main]

use libfuzzer_sys::fuzz_target;
use newsletter_architect::domain::{Lead, LeadData};

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<LeadData>(data) {
        let _ = Lead::try_from(payload);
    }
});
