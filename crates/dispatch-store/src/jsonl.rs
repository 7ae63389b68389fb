use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::record::MessageRecord;
use crate::traits::MessageStore;

/// File-backed JSON-lines message store.
///
/// Each append serializes one [`MessageRecord`] as a single JSON object
/// followed by a newline. The file is opened in append mode and created
/// (along with parent directories) if absent. Reads open the file
/// independently, so readers never block the writer.
///
/// There is no locking across processes and no transaction boundary:
/// concurrent or repeated appends may interleave or duplicate lines.
pub struct JsonlStore {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonlStore {
    /// Open (or create) a JSON-lines store at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageStore for JsonlStore {
    fn append(&self, record: &MessageRecord) -> StoreResult<()> {
        let line = serde_json::to_string(record)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut w = self.writer.lock().expect("store mutex poisoned");
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;

        debug!(path = %self.path.display(), id = %record.message_id, "record appended");
        Ok(())
    }

    /// Reads the file front-to-back. Lines that fail to parse are logged
    /// and skipped (they represent torn writes or foreign content).
    fn read_all(&self) -> StoreResult<Vec<MessageRecord>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<MessageRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(line = number + 1, error = %e, "skipping malformed record");
                }
            }
        }

        Ok(records)
    }
}
