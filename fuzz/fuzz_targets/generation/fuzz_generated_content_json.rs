// Run with: cargo fuzz run fuzz_generated_content_json
// Model answer text -> GeneratedContent -> sanitized preview body
#![no_main]

use libfuzzer_sys::fuzz_target;
use newsletter_architect::domain::GeneratedContent;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(content) = GeneratedContent::from_json(text) {
            let _ = content.preview_body();
        }
    }
});
