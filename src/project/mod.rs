//! Project loading: source-tree discovery and file reading.
//!
//! The core itself never touches the filesystem; this module produces the
//! file-identifier -> contents map [`crate::extract`] consumes.

mod file_finder;

pub use file_finder::{FileFinder, load_files};
