//! Filesystem helpers built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};

/// Open the directory containing `path` and return it with the file name.
fn parent_and_name(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("{path} has no file name"))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Whether `path` exists and is a regular file.
pub(crate) fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Read a UTF-8 text file.
pub(crate) fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = parent_and_name(path)?;
    dir.read_to_string(name)
}

/// Create or truncate `path` and write `contents`.
pub(crate) fn write(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    let (dir, name) = parent_and_name(path)?;
    dir.write(name, contents)
}

/// Create every missing directory above `path`.
///
/// The walk starts at the path's root (`/`, a drive prefix, or the current
/// directory for relative paths) so absolute paths work under cap-std.
pub(crate) fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let root = parent.ancestors().last().unwrap_or(parent);
    let relative = parent
        .strip_prefix(root)
        .map_err(|_| io::Error::other(format!("{parent} is outside {root}")))?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let base = if root.as_str().is_empty() {
        Utf8Path::new(".")
    } else {
        root
    };
    Dir::open_ambient_dir(base, ambient_authority())?.create_dir_all(relative)
}
