//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{config_dir, default_config_file, expand_tilde, home_dir};
