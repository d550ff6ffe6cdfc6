//! cranelog: crane maintenance-log toolkit
//!
//! Converts maintenance-log workbooks for industrial cranes into a JSON
//! record store, then runs keyword-based part analytics over that store.
//! Three subcommands, run in sequence: `inspect` dumps workbook structure
//! for a human, `import` builds the store from the mechanical and
//! electrical repair logs, `parts` prints the ranked part-frequency report.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod entities;
