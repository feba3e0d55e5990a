//! OS capability abstraction.
//!
//! The `Platform` trait collects every operating-system primitive the
//! dispatcher consumes: process creation, directory enumeration, existence
//! checks, create/delete/chdir, and line-oriented file reads. Keeping these
//! behind a trait makes the dispatcher fully testable against a scripted
//! mock, with `OsPlatform` as the real std-backed implementation.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::Command;

/// One directory entry as reported by [`Platform::list_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Entry name (no path component)
    pub name: String,

    /// True for directories
    pub is_directory: bool,

    /// File size in bytes (0 for directories)
    pub size_bytes: u64,
}

/// Result of enumerating one directory level.
///
/// `truncated` carries the error that stopped enumeration early, if any.
/// Entries collected before the failure are still present, so a caller can
/// show partial results and warn instead of failing hard.
#[derive(Debug)]
pub struct Listing {
    /// Entries enumerated so far, `.` and `..` excluded
    pub entries: Vec<EntryInfo>,

    /// Error that interrupted enumeration, if it did not run to completion
    pub truncated: Option<io::Error>,
}

/// Lines of a file, yielded in order; a mid-stream `Err` means the read
/// failed after streaming had begun.
pub type LineStream = Box<dyn Iterator<Item = io::Result<String>>>;

/// Operating-system capabilities consumed by the dispatcher.
///
/// Every method maps to exactly one OS primitive. No method panics; all
/// failures surface as `io::Error` for the caller to classify.
pub trait Platform {
    /// Create a process from `argv`, wait for it to terminate, and return
    /// its exit code. `argv[0]` is the program image.
    fn spawn_wait(&mut self, argv: &[String]) -> io::Result<i32>;

    /// Enumerate one directory level. Fails outright if `path` is not an
    /// accessible directory; a failure mid-enumeration is reported through
    /// [`Listing::truncated`] instead.
    fn list_entries(&self, path: &Path) -> io::Result<Listing>;

    /// True if `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// True if `path` names an existing directory.
    fn is_directory(&self, path: &Path) -> bool;

    /// Create a single directory.
    fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Delete a regular file.
    fn delete_file(&mut self, path: &Path) -> io::Result<()>;

    /// Change the process working directory.
    fn change_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Absolute current working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Directory containing the running program image. `util` scripts and
    /// the help resource are resolved relative to this.
    fn install_dir(&self) -> io::Result<PathBuf>;

    /// Open `path` for line-oriented reading.
    fn read_lines(&self, path: &Path) -> io::Result<LineStream>;

    /// Clear the terminal screen.
    fn clear_screen(&mut self) -> io::Result<()>;
}

/// `Platform` implementation backed by std.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsPlatform;

impl OsPlatform {
    /// Create a new OS-backed platform.
    pub fn new() -> Self {
        Self
    }
}

impl Platform for OsPlatform {
    fn spawn_wait(&mut self, argv: &[String]) -> io::Result<i32> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty command line")
        })?;

        let status = Command::new(program).args(args).status()?;

        // Terminated-by-signal has no code on Unix; report it as -1.
        Ok(status.code().unwrap_or(-1))
    }

    fn list_entries(&self, path: &Path) -> io::Result<Listing> {
        let read_dir = fs::read_dir(path)?;
        let mut entries = Vec::new();
        let mut truncated = None;

        // read_dir never yields `.` or `..`
        for entry in read_dir {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    truncated = Some(e);
                    break;
                }
            };
            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    truncated = Some(e);
                    break;
                }
            };
            entries.push(EntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory: metadata.is_dir(),
                size_bytes: if metadata.is_dir() { 0 } else { metadata.len() },
            });
        }

        Ok(Listing { entries, truncated })
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn delete_file(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn change_dir(&mut self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn install_dir(&self) -> io::Result<PathBuf> {
        let exe = std::env::current_exe()?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "program has no parent directory")
        })
    }

    fn read_lines(&self, path: &Path) -> io::Result<LineStream> {
        let file = fs::File::open(path)?;
        Ok(Box::new(BufReader::new(file).lines()))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        use std::io::Write;
        let mut stdout = io::stdout().lock();
        // ANSI: erase display, cursor home
        stdout.write_all(b"\x1b[2J\x1b[H")?;
        stdout.flush()
    }
}
