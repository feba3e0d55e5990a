//! Shared test fixtures: a capturing I/O endpoint and a scripted platform.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use acorn_shell::io::CharIo;
use acorn_shell::platform::{EntryInfo, Listing, Platform};

// ============================================================================
// Mock I/O
// ============================================================================

/// I/O endpoint that captures everything the shell writes.
pub struct MockIo {
    output: String,
}

impl MockIo {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn output(&self) -> String {
        self.output.clone()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl CharIo for MockIo {
    type Error = io::Error;

    fn get_char(&mut self) -> Result<Option<char>, Self::Error> {
        // Tests drive the shell through process_char directly
        Ok(None)
    }

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        self.output.push(c);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.output.push_str(s);
        Ok(())
    }
}

// ============================================================================
// Mock Platform
// ============================================================================

/// Scripted platform: an in-memory filesystem plus recorded side effects.
///
/// Paths are matched literally (no resolution); tests use the same path
/// spelling for setup and for the command under test.
pub struct MockPlatform {
    pub cwd: PathBuf,
    pub install_dir: PathBuf,

    /// Existing directories
    pub dirs: BTreeSet<PathBuf>,

    /// Existing regular files, mapped to their lines
    pub files: BTreeMap<PathBuf, Vec<String>>,

    /// Every argv handed to spawn_wait, in order
    pub spawned: Vec<Vec<String>>,

    /// Exit code the next spawn reports
    pub spawn_exit_code: i32,

    /// Make spawn_wait fail with NotFound
    pub fail_spawn: bool,

    /// Make change_dir fail with PermissionDenied
    pub fail_chdir: bool,

    /// Make create_dir / delete_file fail with PermissionDenied
    pub fail_mutation: bool,

    /// Make clear_screen fail
    pub fail_clear: bool,

    /// Interrupt directory enumeration after this many entries
    pub truncate_listing_after: Option<usize>,

    /// Interrupt file reads after this many lines
    pub fail_read_after: Option<usize>,

    /// Number of clear_screen calls observed
    pub cleared: usize,
}

impl MockPlatform {
    pub fn new() -> Self {
        let cwd = PathBuf::from("/work");
        let mut dirs = BTreeSet::new();
        dirs.insert(cwd.clone());
        Self {
            cwd,
            install_dir: PathBuf::from("/opt/acorn"),
            dirs,
            files: BTreeMap::new(),
            spawned: Vec::new(),
            spawn_exit_code: 0,
            fail_spawn: false,
            fail_chdir: false,
            fail_mutation: false,
            fail_clear: false,
            truncate_listing_after: None,
            fail_read_after: None,
            cleared: 0,
        }
    }

    pub fn add_dir(&mut self, path: &str) {
        self.dirs.insert(PathBuf::from(path));
    }

    pub fn add_file(&mut self, path: &str, lines: &[&str]) {
        self.files
            .insert(PathBuf::from(path), lines.iter().map(|s| s.to_string()).collect());
    }

    fn denied() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
    }

    /// Direct children of `path` among the scripted dirs and files.
    fn children_of(&self, path: &Path) -> Vec<EntryInfo> {
        let mut entries = Vec::new();
        for dir in &self.dirs {
            if dir.parent() == Some(path) {
                entries.push(EntryInfo {
                    name: dir.file_name().unwrap().to_string_lossy().into_owned(),
                    is_directory: true,
                    size_bytes: 0,
                });
            }
        }
        for (file, lines) in &self.files {
            if file.parent() == Some(path) {
                entries.push(EntryInfo {
                    name: file.file_name().unwrap().to_string_lossy().into_owned(),
                    is_directory: false,
                    size_bytes: lines.iter().map(|l| l.len() as u64 + 1).sum(),
                });
            }
        }
        entries
    }
}

impl Platform for MockPlatform {
    fn spawn_wait(&mut self, argv: &[String]) -> io::Result<i32> {
        if self.fail_spawn {
            return Err(io::Error::new(io::ErrorKind::NotFound, "command not found"));
        }
        self.spawned.push(argv.to_vec());
        Ok(self.spawn_exit_code)
    }

    fn list_entries(&self, path: &Path) -> io::Result<Listing> {
        if !self.dirs.contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "not a directory"));
        }
        let mut entries = self.children_of(path);
        let truncated = match self.truncate_listing_after {
            Some(n) if entries.len() > n => {
                entries.truncate(n);
                Some(io::Error::new(io::ErrorKind::Other, "enumeration interrupted"))
            }
            _ => None,
        };
        Ok(Listing { entries, truncated })
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        if self.fail_mutation {
            return Err(Self::denied());
        }
        self.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn delete_file(&mut self, path: &Path) -> io::Result<()> {
        if self.fail_mutation {
            return Err(Self::denied());
        }
        self.files.remove(path);
        Ok(())
    }

    fn change_dir(&mut self, path: &Path) -> io::Result<()> {
        if self.fail_chdir {
            return Err(Self::denied());
        }
        self.cwd = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        };
        Ok(())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn install_dir(&self) -> io::Result<PathBuf> {
        Ok(self.install_dir.clone())
    }

    fn read_lines(&self, path: &Path) -> io::Result<acorn_shell::platform::LineStream> {
        let lines = self
            .files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;

        let mut results: Vec<io::Result<String>> = lines.iter().cloned().map(Ok).collect();
        if let Some(n) = self.fail_read_after {
            results.truncate(n);
            results.push(Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read interrupted",
            )));
        }
        Ok(Box::new(results.into_iter()))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.fail_clear {
            return Err(io::Error::new(io::ErrorKind::Other, "no terminal"));
        }
        self.cleared += 1;
        Ok(())
    }
}
