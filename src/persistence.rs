// File: src/persistence.rs
use crate::host::MemoryStore;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error};
use std::path::Path;
use tempfile::NamedTempFile;

/// Saves the deck store atomically: serialize into a temp file in the same
/// directory, then persist over the target, so a crash mid-write never
/// leaves a truncated store behind.
pub fn save_to_disk(store: &MemoryStore, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, store)
        .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<MemoryStore, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::CardStore;

    #[test]
    fn store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.bin");

        let mut store = MemoryStore::new();
        let id = store.add_note("Math", "Let VL1 be given.", "Then VL1.");
        save_to_disk(&store, &path).unwrap();

        let loaded = load_from_disk(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.note(id).unwrap().source_front,
            "Let VL1 be given."
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_disk(&dir.path().join("absent.bin")).is_err());
    }
}
