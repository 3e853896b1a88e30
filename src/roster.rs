//! GRM roster export reader
//!
//! The roster file is a semicolon-delimited CSV with a header row. Every row
//! becomes a map from header name to trimmed cell value.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::RosterError;

/// One roster row keyed by column header, in file column order
pub type GrmRecord = Map<String, Value>;

/// Read the whole roster file.
///
/// The file is read fresh on every call. A missing file, unreadable bytes or
/// a row whose width differs from the header all fail the read.
pub async fn read_grm(path: &Path) -> Result<Vec<GrmRecord>, RosterError> {
    let bytes = tokio::fs::read(path).await?;
    let records = parse_grm(&bytes)?;
    log::debug!("Read {} roster rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parse roster bytes already in memory.
pub fn parse_grm(bytes: &[u8]) -> Result<Vec<GrmRecord>, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();

    reader
        .records()
        .map(|row| -> Result<GrmRecord, RosterError> {
            let row = row?;
            Ok(headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.to_string(), Value::String(v.to_string())))
                .collect())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_single_row() {
        let records = parse_grm(b"id;name;rank\n1;Foo;5\n").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], "1");
        assert_eq!(records[0]["name"], "Foo");
        assert_eq!(records[0]["rank"], "5");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let records = parse_grm(b" id ; name \n 7 ;  Bar  \n").unwrap();

        assert_eq!(records[0]["id"], "7");
        assert_eq!(records[0]["name"], "Bar");
    }

    #[test]
    fn test_parse_header_only() {
        let records = parse_grm(b"id;name\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_empty_cells_kept() {
        let records = parse_grm(b"id;note\n3;\n").unwrap();
        assert_eq!(records[0]["note"], "");
    }

    #[test]
    fn test_parse_keeps_column_order() {
        let records = parse_grm(b"zeta;alpha\n1;2\n").unwrap();

        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"zeta":"1","alpha":"2"}"#
        );
    }

    #[test]
    fn test_parse_ragged_row_fails() {
        let err = parse_grm(b"id;name\n1;Foo;extra\n").unwrap_err();
        assert!(matches!(err, RosterError::Csv(_)));
    }

    #[tokio::test]
    async fn test_read_grm_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grm.csv");
        std::fs::write(&path, "id;name\n1;Foo\n2;Baz\n").unwrap();

        let records = read_grm(&path).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["name"], "Baz");
    }

    #[tokio::test]
    async fn test_read_grm_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_grm(&dir.path().join("nope.csv")).await.unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }
}
