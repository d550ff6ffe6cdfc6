//! Keyword-based part analytics over the record store

pub mod tagger;
pub mod vocabulary;

pub use tagger::{PartCount, PartReport, SampleDetail};
pub use vocabulary::{ACTION_KEYWORDS, PART_KEYWORDS};
