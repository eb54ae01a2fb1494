use std::collections::HashMap;
use std::path::{Path, PathBuf};


/// Read-through cache of source lines, keyed by the path as reported in the
/// frame. Files that cannot be read are remembered as empty so they are only
/// tried (and logged) once per cache.
#[derive(Debug, Default)]
pub struct LineCache {
    root: Option<PathBuf>,
    files: HashMap<PathBuf, Vec<String>>,
}

impl LineCache {
    pub fn new() -> Self {
        LineCache::default()
    }

    /// Relative frame paths are looked up under `root` instead of the working directory.
    pub fn with_root(root: Option<PathBuf>) -> Self {
        LineCache {
            root,
            files: HashMap::new(),
        }
    }

    /// Returns line `line` (1-based) of `path` with trailing whitespace removed,
    /// or an empty string when the line or the file is unavailable.
    pub fn line(&mut self, path: &Path, line: usize) -> &str {
        if line == 0 {
            return "";
        }
        let lines = self.lines(path);
        lines.get(line - 1).map(|l| l.as_str()).unwrap_or("")
    }

    fn lines(&mut self, path: &Path) -> &[String] {
        if !self.files.contains_key(path) {
            let resolved = self.resolve(path);
            let lines = read_lines(&resolved);
            self.files.insert(path.to_path_buf(), lines);
        }
        self.files.get(path).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    match std::fs::read(path) {
        Ok(bytes) => split_lines(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Source file unavailable");
            Vec::new()
        }
    }
}

/// Splits on `\r\n`, `\n` and a lone `\r`, trimming trailing whitespace.
fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = normalized
        .split('\n')
        .map(|l| l.trim_end().to_string())
        .collect();
    // A terminating newline does not start another line.
    if normalized.ends_with('\n') {
        lines.pop();
    }
    lines
}

/// One-shot lookup of a single line. Never fails: unreadable files and
/// out-of-range lines give `""`.
pub fn getline(path: impl AsRef<Path>, line: usize) -> String {
    LineCache::new().line(path.as_ref(), line).to_string()
}
