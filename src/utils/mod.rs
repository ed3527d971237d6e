//! Shared helpers

pub mod paths;

pub use paths::{find_package_root, normalize_path};
