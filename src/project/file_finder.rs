//! Source-tree discovery: recursive `.js` collection with substring filters.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Finds `.js` source files under a root directory.
///
/// Paths containing an exclude fragment are skipped, unless an include
/// fragment forces them back in. Fragments match by substring, not glob.
#[derive(Debug, Clone, Default)]
pub struct FileFinder {
    excludes: Vec<String>,
    includes: Vec<String>,
}

impl FileFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude(mut self, fragment: impl Into<String>) -> Self {
        self.excludes.push(fragment.into());
        self
    }

    pub fn include(mut self, fragment: impl Into<String>) -> Self {
        self.includes.push(fragment.into());
        self
    }

    fn accepts(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let mut ignored = self
            .excludes
            .iter()
            .any(|fragment| path_str.contains(fragment.as_str()));
        if ignored
            && self
                .includes
                .iter()
                .any(|fragment| path_str.contains(fragment.as_str()))
        {
            // force inclusion overrides an exclude
            ignored = false;
        }
        !ignored
    }

    /// Collect matching file paths, sorted for deterministic ordering.
    pub fn collect_file_paths(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        self.collect_recursive(root, &mut paths)?;
        paths.sort();
        Ok(paths)
    }

    fn collect_recursive(&self, dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                self.collect_recursive(&path, out)?;
            } else if path.extension().is_some_and(|ext| ext == "js") && self.accepts(&path) {
                out.push(path);
            }
        }
        Ok(())
    }
}

/// Read every discovered file into the `(file identifier, contents)` pairs
/// the core consumes.
pub fn load_files(root: &Path, finder: &FileFinder) -> io::Result<Vec<(String, String)>> {
    let mut files = Vec::new();
    for path in finder.collect_file_paths(root)? {
        let text = fs::read_to_string(&path)?;
        files.push((path.to_string_lossy().into_owned(), text));
    }
    Ok(files)
}
