// Run with: cargo fuzz run fuzz_field_update
// {field, value} updates against the wizard configuration
#![no_main]

use libfuzzer_sys::fuzz_target;
use newsletter_architect::domain::{ConfigField, NewsletterConfig};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if let Ok(v) = serde_json::from_slice::<Value>(data) {
        let field = v.get("field").and_then(|f| f.as_str()).unwrap_or("");
        let value = v
            .get("value")
            .and_then(|s| s.as_str())
            .unwrap_or("")
            .to_string();

        let mut config = NewsletterConfig::default();
        if let Ok(field) = ConfigField::parse(field) {
            let before = config.clone();
            match config.set_field(field, value.clone()) {
                Ok(()) if field.is_free_text() => assert_eq!(config.field(field), value),
                Ok(()) => {}
                Err(_) => assert_eq!(config, before),
            }
        }
    }
});
