//! Export target directory resolution

pub mod resolver;

pub use resolver::{clean_path, resolve_target_dir, TargetResolver};
