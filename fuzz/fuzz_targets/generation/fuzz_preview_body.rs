// Run with: cargo fuzz run fuzz_preview_body
// Nothing outside the allowed tags may survive sanitizing
#![no_main]

use libfuzzer_sys::fuzz_target;
use newsletter_architect::domain::{ALLOWED_TAGS, PreviewBody};

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let body = PreviewBody::sanitize(&html);
    let out = body.as_ref();

    for (index, _) in out.match_indices('<') {
        let rest = &out[index + 1..];
        assert!(
            ALLOWED_TAGS.iter().any(|tag| {
                rest.starts_with(&format!("{tag}>")) || rest.starts_with(&format!("/{tag}>"))
            }),
            "unexpected markup in {out:?}"
        );
    }
});
