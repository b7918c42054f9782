//! Write generated artifacts under an asset root, touching files only when
//! their content changes
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// stored content already matched, nothing was touched
    Unchanged,
    /// file created or overwritten
    Written,
}

/// after `write` returns `Ok`, the stored content equals `content`
pub trait FileStore {
    fn write(&mut self, relative_path: &str, content: &str) -> Result<WriteOutcome>;
}

/// makes a file writable before it is overwritten, e.g. a version control
/// checkout
pub trait Checkout {
    fn checkout(&self, path: &Path) -> Result<()>;
}

/// runs an external command with the file path appended, e.g. `p4 edit`
pub struct CommandCheckout {
    program: String,
    args: Vec<String>,
}

impl CommandCheckout {
    /// split a command line on whitespace. `None` if it is blank
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl Checkout for CommandCheckout {
    fn checkout(&self, path: &Path) -> Result<()> {
        log::debug!("checkout: {} {:?} {}", self.program, self.args, path.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to run checkout command: {}", self.program))?;

        if !status.success() {
            bail!("checkout of {} failed with {}", path.display(), status);
        }
        Ok(())
    }
}

/// [`FileStore`] on the local filesystem
pub struct FsFileStore {
    root: PathBuf,
    checkout: Option<Box<dyn Checkout>>,
}

impl FsFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            checkout: None,
        }
    }

    pub fn with_checkout(mut self, checkout: Box<dyn Checkout>) -> Self {
        self.checkout = Some(checkout);
        self
    }

    // create every missing folder between the root and the file
    fn create_folders(&self, relative_path: &str) -> Result<()> {
        let mut folder = self.root.clone();
        let segments: Vec<&str> = relative_path.split('/').filter(|s| !s.is_empty()).collect();

        if let Some((_file, dirs)) = segments.split_last() {
            for dir in dirs {
                folder.push(dir);
                if !folder.is_dir() {
                    log::debug!("create folder: {}", folder.display());
                    std::fs::create_dir(&folder).with_context(|| {
                        format!("failed to create folder: {}", folder.display())
                    })?;
                }
            }
        }
        Ok(())
    }
}

impl FileStore for FsFileStore {
    fn write(&mut self, relative_path: &str, content: &str) -> Result<WriteOutcome> {
        self.create_folders(relative_path)?;
        let path = self.root.join(relative_path);

        if path.is_file() {
            // bytes, so a file that is not UTF-8 still counts as changed
            let existing = std::fs::read(&path)
                .with_context(|| format!("failed to read: {}", path.display()))?;
            if existing == content.as_bytes() {
                log::debug!("unchanged: {}", path.display());
                return Ok(WriteOutcome::Unchanged);
            }
        }

        if let Some(checkout) = &self.checkout {
            checkout.checkout(&path)?;
        }

        std::fs::write(&path, content)
            .with_context(|| format!("failed to write: {}", path.display()))?;

        log::info!("import: {}", path.display());
        Ok(WriteOutcome::Written)
    }
}
