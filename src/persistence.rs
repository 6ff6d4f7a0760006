// src/persistence.rs
use crate::core::engine::MiningOutcome;
use crate::error::MinerError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a mining outcome to disk as a bincode snapshot. The write goes
/// through a named temp file in the target directory and is persisted with
/// a rename, so a crash mid-write never leaves a truncated snapshot.
pub fn save_outcome(outcome: &MiningOutcome, path: &Path) -> Result<(), MinerError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, outcome)?;

    temp_file
        .persist(path)
        .map_err(|e| MinerError::Io(e.error))?;
    Ok(())
}

/// Reads a snapshot previously written by [`save_outcome`].
pub fn load_outcome(path: &Path) -> Result<MiningOutcome, MinerError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let outcome = bincode::deserialize_from(reader)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Rule, SupportTable};
    use std::collections::BTreeSet;

    #[test]
    fn snapshot_round_trips() {
        let lhs: BTreeSet<String> = ["a".to_string()].into_iter().collect();
        let rhs: BTreeSet<String> = ["b".to_string()].into_iter().collect();
        let mut supports = SupportTable::new();
        supports.insert(lhs.clone(), 1.0);
        supports.insert(rhs.clone(), 0.5);
        let outcome = MiningOutcome {
            supports,
            rules: vec![Rule {
                lhs,
                rhs,
                support: 0.5,
                confidence: 0.5,
            }],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outcome.bin");
        save_outcome(&outcome, &path).unwrap();
        let loaded = load_outcome(&path).unwrap();
        assert_eq!(loaded, outcome);
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_outcome(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, MinerError::Io(_)));
    }
}
