mod read;

pub use read::*;
