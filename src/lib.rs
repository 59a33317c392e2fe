//! Core library for the barback-tools command line application.
//!
//! The library exposes high-level orchestration helpers that power the
//! command-line interface as well as the integration tests. The modules are
//! structured to keep responsibilities narrow and composable: workbook IO
//! adapters live under [`io`], spreadsheet representations inside [`model`],
//! the merge pipeline in [`merge`], and the menu renderer under [`menu`].

pub mod error;
pub mod io;
pub mod menu;
pub mod merge;
pub mod model;
pub mod sample;

pub use error::{Result, ToolError};
