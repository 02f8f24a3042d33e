//! # Path Utilities

use std::path::{Path, PathBuf};

/// Join `root / context[0] / ... / context[n] / file`.
///
/// Pure path arithmetic; nothing is checked or created on disk.
pub fn extend_path<P, S, F>(
    root: P,
    context: &[S],
    file: F,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<Path>,
    F: AsRef<Path>,
{
    let mut path = root.as_ref().to_path_buf();
    path.extend(context.iter().map(|s| s.as_ref()));
    path.push(file.as_ref());
    path
}

/// The final path segment of a url, ignoring any query or fragment.
///
/// Returns `None` for urls which end in `/`.
pub fn url_file_name(url: &str) -> Option<&str> {
    let url = url.split(['?', '#']).next().unwrap_or(url);
    match url.rsplit('/').next() {
        Some(name) if !name.is_empty() => Some(name),
        _ => None,
    }
}
