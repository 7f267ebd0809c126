//! Domain models for publication screening
//!
//! All entities are transient: they are built by the retrieval layer or by
//! the classifier and consumed within a single screening call.

pub mod author;
pub mod classification;
pub mod paper;

pub use author::Author;
pub use classification::{AffiliationRecord, PublicationClassification};
pub use paper::Paper;
