mod error;
mod field;
mod generate;
mod navigation;
mod preview;
mod routes;
mod state;

pub use error::*;
pub use field::*;
pub use generate::*;
pub use navigation::*;
pub use preview::*;
pub use routes::*;
pub use state::*;
