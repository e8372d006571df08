use crate::CoreError;

/// Position-addressed operations over an ordered record collection.
///
/// Positions are 1-based and follow the current in-memory order, so removing
/// a record shifts every later position down by one.
pub struct RecordService;

impl RecordService {
    /// Returns the collection with `record` added at the end.
    pub fn append<R>(mut records: Vec<R>, record: R) -> Vec<R> {
        records.push(record);
        records
    }

    /// Returns the collection without the record at `position`.
    pub fn remove_at<R>(mut records: Vec<R>, position: usize) -> Result<Vec<R>, CoreError> {
        let index = Self::index_of(records.len(), position)?;
        records.remove(index);
        Ok(records)
    }

    pub fn record_at<R>(records: &[R], position: usize) -> Result<&R, CoreError> {
        let index = Self::index_of(records.len(), position)?;
        Ok(&records[index])
    }

    /// Maps a 1-based position onto a slice index, rejecting anything outside `[1, len]`.
    pub fn index_of(len: usize, position: usize) -> Result<usize, CoreError> {
        if position == 0 || position > len {
            return Err(CoreError::InvalidPosition { position, len });
        }
        Ok(position - 1)
    }
}
