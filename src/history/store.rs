use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{core::CineError, profile::Profile};

/// Fixed key the history blob is stored under.
pub const HISTORY_KEY: &str = "cinepulse_history";

/// Durable storage for the profile history.
///
/// Every `save` replaces the stored blob with the complete serialization of
/// the list it is given; there is no incremental write.
pub trait HistoryStore: Send + Sync {
    /// Loads the stored history. An absent blob is an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be read or is not valid history JSON.
    fn load(&self) -> Result<Vec<Profile>, CineError>;

    /// Replaces the stored history.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be written.
    fn save(&self, history: &[Profile]) -> Result<(), CineError>;

    /// Stores the empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be written.
    fn clear(&self) -> Result<(), CineError> {
        self.save(&[])
    }
}

fn decode(blob: &str) -> Result<Vec<Profile>, CineError> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(blob)?)
}

fn encode(history: &[Profile]) -> Result<String, CineError> {
    Ok(serde_json::to_string(history)?)
}

/* ----------------------- FileStore ----------------------- */

/// Stores the blob as `<dir>/cinepulse_history.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. Nothing is touched until the first load or save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{HISTORY_KEY}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileStore {
    fn load(&self) -> Result<Vec<Profile>, CineError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => decode(&blob),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, history: &[Profile]) -> Result<(), CineError> {
        let blob = encode(history)?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        // Write beside the target, then rename over it, so a reader sees
        // either the previous blob or the new one.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), entries = history.len(), "history saved");
        Ok(())
    }
}

/* ----------------------- MemoryStore ----------------------- */

#[derive(Debug, Default)]
struct MemoryState {
    blob: Option<String>,
    fail_writes: bool,
}

/// Keeps the blob in process memory. Useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a raw blob, as if written by an earlier run.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                blob: Some(blob.into()),
                fail_writes: false,
            }),
        }
    }

    /// The raw stored blob, if anything has been written.
    #[must_use]
    pub fn blob(&self) -> Option<String> {
        self.lock().blob.clone()
    }

    /// Makes every subsequent `save` fail with an I/O error.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A poisoned lock still holds a consistent blob; writes replace it whole.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<Profile>, CineError> {
        match self.lock().blob.as_deref() {
            Some(blob) => decode(blob),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, history: &[Profile]) -> Result<(), CineError> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(std::io::Error::other("storage write refused").into());
        }
        state.blob = Some(encode(history)?);
        Ok(())
    }
}

impl<T: HistoryStore + ?Sized> HistoryStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Vec<Profile>, CineError> {
        (**self).load()
    }

    fn save(&self, history: &[Profile]) -> Result<(), CineError> {
        (**self).save(history)
    }

    fn clear(&self) -> Result<(), CineError> {
        (**self).clear()
    }
}
