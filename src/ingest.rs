// src/ingest.rs
use crate::core::types::Transaction;
use crate::error::MinerError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Loads a tabular CSV dataset as a transaction store.
///
/// The header row names the columns; the first column is treated as a row
/// identifier and dropped. Every remaining cell becomes one item labeled
/// `"<column_name>_<value>"`, so e.g. a `Country` column holding `Brazil`
/// yields the item `Country_Brazil`.
pub fn load_csv(path: &Path) -> Result<Vec<Transaction>, MinerError> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(MinerError::NoDataRows),
    };
    // Skip the identifier column.
    let names: Vec<String> = split_row(&header).into_iter().skip(1).collect();

    let mut transactions = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_row(&line);
        if fields.len() != names.len() + 1 {
            return Err(MinerError::RaggedRow {
                row: idx + 2, // 1-based, counting the header
                found: fields.len(),
                expected: names.len() + 1,
            });
        }
        let tran: Transaction = names
            .iter()
            .zip(fields.into_iter().skip(1))
            .map(|(name, value)| format!("{}_{}", name, value))
            .collect();
        transactions.push(tran);
    }

    if transactions.is_empty() {
        return Err(MinerError::NoDataRows);
    }
    debug!(rows = transactions.len(), columns = names.len(), "dataset loaded");
    Ok(transactions)
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn labels_combine_column_and_value() {
        let file = write_csv("Id,Country,Sector\n1,Brazil,Energy\n2,Chile,Mining\n");
        let trans = load_csv(file.path()).unwrap();
        assert_eq!(trans.len(), 2);
        assert!(trans[0].contains("Country_Brazil"));
        assert!(trans[0].contains("Sector_Energy"));
        assert!(trans[1].contains("Country_Chile"));
        // the identifier column never becomes an item
        assert!(!trans[0].iter().any(|item| item.starts_with("Id_")));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let file = write_csv("Id,Country,Sector\n1,Brazil\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, MinerError::RaggedRow { row: 2, .. }));
    }

    #[test]
    fn header_only_file_is_rejected() {
        let file = write_csv("Id,Country,Sector\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, MinerError::NoDataRows));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let file = write_csv("Id,Country\n1,Brazil\n\n2,Chile\n");
        let trans = load_csv(file.path()).unwrap();
        assert_eq!(trans.len(), 2);
    }
}
