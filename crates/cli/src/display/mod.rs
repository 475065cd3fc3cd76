pub mod formatter;

pub use formatter::{format_glob, print_targets};
