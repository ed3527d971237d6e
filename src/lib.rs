//! dart-exports: keep Dart export files in sync with their directories
//!
//! Scans a Dart file for `export '...';` statements, works out which directory
//! they mostly point into, and rewrites the export block (or the directory's
//! aggregator file) so it lists exactly the `.dart` files found there.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exports;
pub mod render;
pub mod utils;
