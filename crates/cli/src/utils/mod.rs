pub mod discover;

pub use discover::find_build_files;
