use crate::CoreError;

/// Abstraction over persistence backends that hold a full record collection.
///
/// Implementations treat a missing location as an empty collection and
/// always replace the stored snapshot wholesale on `save`.
pub trait RecordStorage<R> {
    fn load(&self) -> Result<Vec<R>, CoreError>;
    fn save(&self, records: &[R]) -> Result<(), CoreError>;
}
