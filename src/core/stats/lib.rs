mod correlation;
mod error;
mod moments;
mod regression;

pub use correlation::*;
pub use error::*;
pub use moments::*;
pub use regression::*;
