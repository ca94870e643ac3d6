//! Opening files with the permissions the tools need

use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// Who may read a file we create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Mode 0644
    Public,
    /// Mode 0600
    Private,
}

impl Visibility {
    fn mode(self) -> u32 {
        match self {
            Visibility::Public => 0o644,
            Visibility::Private => 0o600,
        }
    }
}

/// Open a file writable, creating or truncating it
pub fn fopen_w<P: AsRef<Path>>(path: P, visibility: Visibility) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .read(false)
        .truncate(true)
        .mode(visibility.mode())
        .open(path)
}

/// Open a file readable
pub fn fopen_r<P: AsRef<Path>>(path: P) -> std::io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(false)
        .create(false)
        .truncate(false)
        .open(path)
}

/// Create a file that must not exist yet, atomically (`O_CREAT | O_EXCL`).
///
/// Fails with [std::io::ErrorKind::AlreadyExists] if the path exists. Note
/// that exclusive creation is unreliable on some network file systems.
pub fn fopen_new<P: AsRef<Path>>(path: P, visibility: Visibility) -> std::io::Result<File> {
    OpenOptions::new()
        .create_new(true)
        .write(true)
        .mode(visibility.mode())
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{ErrorKind, Read, Write};
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn exclusive_creation_fails_the_second_time() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("lock");

        fopen_new(&path, Visibility::Private)?.write_all(b"held")?;
        let err = fopen_new(&path, Visibility::Private).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);

        let mode = std::fs::metadata(&path)?.permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        Ok(())
    }

    #[test]
    fn write_then_read_back() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data");

        fopen_w(&path, Visibility::Public)?.write_all(b"first version")?;
        fopen_w(&path, Visibility::Public)?.write_all(b"second")?;

        let mut contents = String::new();
        fopen_r(&path)?.read_to_string(&mut contents)?;
        assert_eq!(contents, "second");
        Ok(())
    }
}
