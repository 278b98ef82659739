//! Probe whether a path supports direct, cache-bypassing I/O.

use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// Outcome of reopening the probe file with `O_DIRECT`.
#[derive(Debug)]
pub enum DirectSupport {
    Supported,
    /// The OS refused the direct-I/O open; the error says why.
    Unsupported(io::Error),
}

/// Create a fresh file at `path`, then reopen it with `O_DIRECT`.
///
/// The create step is exclusive and is the only failure mode: a path
/// that already exists, or can't be created, is an error. Refusal of the
/// reopen step is the answer being probed for, not a failure. The probe
/// file is left in place.
pub fn probe(path: &Path) -> io::Result<DirectSupport> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)?;

    let reopened = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .mode(0o664)
        .custom_flags(libc::O_DIRECT)
        .open(path);

    match reopened {
        Ok(_) => Ok(DirectSupport::Supported),
        Err(err) => Ok(DirectSupport::Unsupported(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn probe_creates_the_file_and_reports_an_outcome() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("probe.dat");

        let outcome = probe(&path).unwrap();
        assert!(path.exists());

        // Some test filesystems reject O_DIRECT on regular files; either
        // answer is a valid probe result.
        if let DirectSupport::Unsupported(err) = outcome {
            assert!(err.raw_os_error().is_some());
        }
    }

    #[test]
    fn probe_refuses_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("probe.dat");
        std::fs::write(&path, b"taken").unwrap();

        let err = probe(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
