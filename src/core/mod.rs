//! Core module - import pipeline and store plumbing

pub mod dates;
pub mod ids;
pub mod importer;
pub mod store;
pub mod workbook;

pub use ids::IdAllocator;
pub use importer::{ImportStats, Importer, Source};
pub use store::{Document, StoreError};
pub use workbook::{SheetGrid, Workbook, WorkbookError};
