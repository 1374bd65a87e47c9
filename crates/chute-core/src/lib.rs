pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{ChuteError, Result};
pub use tolerance::Tolerance;
