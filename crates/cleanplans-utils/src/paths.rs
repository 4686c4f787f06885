//! Location of the launcher and its companion executables
//!
//! The companion binaries are deployed in the same directory as the launcher,
//! so every lookup starts from the launcher's own executable path. The current
//! working directory is never consulted: host applications start the launcher
//! from wherever they happen to be.

use std::io;
use std::path::{Path, PathBuf};

/// Canonicalize `path`, resolving every symlink along the way.
///
/// On Windows this avoids the `\\?\` verbatim prefix so the resulting path can
/// be handed to tools that do not understand it.
pub fn canonicalize(path: &Path) -> io::Result<PathBuf> {
    #[cfg(windows)]
    {
        dunce::canonicalize(path)
    }
    #[cfg(not(windows))]
    {
        std::fs::canonicalize(path)
    }
}

/// Absolute, symlink-free path of the running launcher executable.
pub fn launcher_exe() -> io::Result<PathBuf> {
    canonicalize(&std::env::current_exe()?)
}

/// Absolute, symlink-free directory containing the running launcher.
pub fn launcher_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    launcher_dir_from(&exe)
}

/// Directory containing the executable at `exe`, after resolving symlinks.
///
/// A symlinked launcher resolves to the directory of the link target, which is
/// where the companions live.
pub fn launcher_dir_from(exe: &Path) -> io::Result<PathBuf> {
    let resolved = canonicalize(exe)?;
    match resolved.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable path has no parent: {}", resolved.display()),
        )),
    }
}

/// Join the launcher directory with a companion file name.
///
/// Existence is not checked; a missing companion surfaces when it is spawned.
#[must_use]
pub fn companion_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}
