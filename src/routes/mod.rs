mod access;
mod health_check;
mod wizard;

pub use access::*;
pub use health_check::*;
pub use wizard::*;
