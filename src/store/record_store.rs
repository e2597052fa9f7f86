//! Record Store
//!
//! Owns the on-disk JSON file and the append/list operations over it.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::record::{FormRecord, RecordMap};

/// JSON-file backed, append-only record store
///
/// ## Concurrency:
/// - `write_lock` serializes append's read-modify-write within this process
/// - Reads take no lock; the rename on write means a reader sees either the
///   old or the new file, never a half-written one
pub struct RecordStore {
    /// Store configuration
    config: Config,

    /// Serializes append operations
    write_lock: Mutex<()>,
}

impl RecordStore {
    const TMP_SUFFIX: &'static str = ".tmp";

    /// Create a store over the configured file
    ///
    /// No I/O happens here; the parent directory is created on first append.
    pub fn open(config: Config) -> Self {
        debug!(path = %config.data_file.display(), "Opening record store");
        Self {
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Self {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Append a record to the end of the file
    ///
    /// Steps:
    /// 1. Acquire write lock
    /// 2. Create parent directory if missing
    /// 3. Load existing records
    /// 4. Push the new record and rewrite the whole file
    pub fn append(&self, record: FormRecord) -> Result<()> {
        let _write_guard = self.write_lock.lock();

        let path = &self.config.data_file;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                debug!(dir = %parent.display(), exists = parent.exists(), "Ensuring data directory");
                fs::create_dir_all(parent)?;
            }
        }

        let mut records = self.load()?;
        records.push(record);
        self.persist(&records)?;

        info!(path = %path.display(), count = records.len(), "Appended form record");
        Ok(())
    }

    /// Append from the four field values
    pub fn append_fields(
        &self,
        name: &str,
        full_name: &str,
        location: &str,
        date_of_birth: &str,
    ) -> Result<()> {
        self.append(FormRecord::new(name, full_name, location, date_of_birth))
    }

    /// Load every stored record in insertion order
    ///
    /// Returns:
    /// - `Ok(vec![])` — file missing, empty, or whitespace only
    /// - `Ok(records)` — decoded file content
    /// - `Err(..)` — read failure or content that is not a record array
    pub fn load(&self) -> Result<Vec<FormRecord>> {
        let path = &self.config.data_file;

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Record file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<FormRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Load every record projected to its caller-facing mapping
    pub fn list_all(&self) -> Result<Vec<RecordMap>> {
        let records = self.load()?;
        Ok(records.into_iter().map(RecordMap::from).collect())
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the record file path
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Write the full sequence to `{file}.tmp` and rename it over the file
    fn persist(&self, records: &[FormRecord]) -> Result<()> {
        let path = &self.config.data_file;
        let pretty = self.config.pretty;

        replace_file(&self.tmp_path(), path, self.config.sync_on_write, |writer| {
            if pretty {
                serde_json::to_writer_pretty(writer, records)?;
            } else {
                serde_json::to_writer(writer, records)?;
            }
            Ok(())
        })?;

        debug!(path = %path.display(), records = records.len(), "Record file rewritten");
        Ok(())
    }

    /// "form_data.json" → "form_data.json.tmp"
    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .config
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("records"));
        name.push(Self::TMP_SUFFIX);
        self.config.data_file.with_file_name(name)
    }
}

/// Write `tmp` through `write`, then rename it over `path`
///
/// On any failure after `tmp` is created it is removed and `path` is left
/// untouched.
fn replace_file<F>(tmp: &Path, path: &Path, sync: bool, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(tmp)?;

    let result: Result<()> = (|| {
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush()?;
        if sync {
            writer.get_ref().sync_all()?;
        }
        drop(writer);
        fs::rename(tmp, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(tmp);
    }
    result
}
