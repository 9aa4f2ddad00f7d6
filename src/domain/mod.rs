mod generated_content;
mod lead;
mod newsletter_config;

pub use generated_content::*;
pub use lead::*;
pub use newsletter_config::*;
