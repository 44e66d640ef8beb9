//! Loading the driver roster.
//!
//! One driver per line: `name,location,load`. Lines with the wrong number of
//! fields are skipped; a load that is not an integer fails the whole load.

use std::path::Path;
use tracing::{debug, info};

use super::{DriverRegistry, RosterError};
use crate::model::Driver;

/// Parses roster text into a registry, keeping line order.
pub fn parse_roster(text: &str) -> Result<DriverRegistry, RosterError> {
    let mut drivers = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let mut fields: Vec<&str> = line.split(',').collect();
        while fields.last().is_some_and(|field| field.is_empty()) {
            fields.pop();
        }

        let &[name, location, load] = fields.as_slice() else {
            debug!(line = index + 1, fields = fields.len(), "Skipping malformed roster line");
            continue;
        };

        let load = load.trim();
        let load = load.parse::<i64>().map_err(|source| RosterError::InvalidLoad {
            line: index + 1,
            value: load.to_owned(),
            source,
        })?;
        drivers.push(Driver::new(name.trim(), location.trim(), load));
    }
    Ok(DriverRegistry::new(drivers))
}

/// Reads and parses the roster file at `path`.
pub async fn load_roster(path: impl AsRef<Path>) -> Result<DriverRegistry, RosterError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let registry = parse_roster(&text)?;
    info!(path = %path.display(), drivers = registry.len(), "Roster loaded");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_fields_and_keeps_order() {
        let registry = parse_roster("Bob Smith, Cape Town, 2\nAlice,Durban,0\n").unwrap();
        assert_eq!(
            registry.drivers(),
            &[Driver::new("Bob Smith", "Cape Town", 2), Driver::new("Alice", "Durban", 0)]
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let text = "\nBob,Cape Town\nCarol,Durban,1,extra\nDave,Durban,4,\nEve,,\n";
        let registry = parse_roster(text).unwrap();
        // Only Dave survives: the trailing empty field is dropped before counting
        assert_eq!(registry.drivers(), &[Driver::new("Dave", "Durban", 4)]);
    }

    #[test]
    fn test_parse_fails_on_bad_load() {
        let err = parse_roster("Bob,Cape Town,2\nAlice,Durban,lots\n").unwrap_err();
        match err {
            RosterError::InvalidLoad { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_roster(&path).await.unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drivers.txt");
        std::fs::write(&path, "Bob,Cape Town,2\n").unwrap();

        let registry = load_roster(&path).await.unwrap();
        assert_eq!(registry.len(), 1);
    }
}
