pub mod github;
pub mod showcase;

pub use github::*;
pub use showcase::*;
