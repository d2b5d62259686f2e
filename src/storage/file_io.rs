//! JSON file helpers
//!
//! Writes go to a sibling temp file which is synced and then renamed over the
//! target, so a crash leaves either the old or the new file, never a torn one.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

/// Read a JSON document, falling back to `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> TrackerResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "No data file yet, starting empty");
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write a JSON document atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> TrackerResult<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_and_sync(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            TrackerError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    } else {
        debug!(path = %path.display(), "Wrote data file");
    }
    result
}

fn write_and_sync<T: Serialize + ?Sized>(temp_path: &Path, data: &T) -> TrackerResult<()> {
    let file = File::create(temp_path).map_err(|e| {
        TrackerError::Storage(format!(
            "Failed to create {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))
}

/// `foo.json` -> `foo.json.tmp`, in the same directory so rename stays atomic
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
