use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use pocketbook_core::{CoreError, RecordStorage};
use pocketbook_domain::{Expense, Task};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;

const TMP_SUFFIX: &str = "tmp";
const INDENT: &[u8] = b"    ";

pub type ExpenseStorage = JsonRecordStorage<Expense>;
pub type TaskStorage = JsonRecordStorage<Task>;

/// Filesystem-backed JSON persistence for one record collection.
///
/// The file holds a single JSON array. Every save rewrites the whole array.
#[derive(Debug, Clone)]
pub struct JsonRecordStorage<R> {
    path: PathBuf,
    _records: PhantomData<fn() -> R>,
}

impl<R> JsonRecordStorage<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R> RecordStorage<R> for JsonRecordStorage<R>
where
    R: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<R>, CoreError> {
        load_records_from_path(&self.path)
    }

    fn save(&self, records: &[R]) -> Result<(), CoreError> {
        save_records_to_path(records, &self.path)
    }
}

/// Loads a record collection, treating a missing file as an empty collection.
pub fn load_records_from_path<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, CoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    serde_json::from_str(&data).map_err(|err| CoreError::Corrupt {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Replaces the file at `path` with the full collection by staging to a sibling temp file.
pub fn save_records_to_path<R: Serialize>(records: &[R], path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let data = serialize_records(records)?;
    let tmp = tmp_path(path);
    let staged = write_atomic(&tmp, &data)
        .and_then(|()| fs::rename(&tmp, path).map_err(CoreError::from));
    if staged.is_err() && tmp.is_file() {
        let _ = fs::remove_file(&tmp);
    }
    staged
}

fn serialize_records<R: Serialize>(records: &[R]) -> Result<Vec<u8>, CoreError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    records
        .serialize(&mut serializer)
        .map_err(|err| CoreError::Serde(err.to_string()))?;
    buffer.push(b'\n');
    Ok(buffer)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
