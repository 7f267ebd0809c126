//! Source plugins for fetching publications from online databases

pub mod pubmed;
pub mod traits;

pub use pubmed::*;
pub use traits::*;
