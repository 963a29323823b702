//! Wishlist persistence: one JSON object in the per-user config dir.
//!
//! Best effort on both sides of the boundary. A missing, unreadable or
//! malformed file reads as "no wishlist"; a failed write is logged by the
//! caller and never retried.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "io";
const APP_ORG: &str = "Tidelocked";
const APP_NAME: &str = "ShellShopPlanner";

const WISHLIST_FILE: &str = "wishlist.json";

fn wishlist_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(WISHLIST_FILE))
}

/// Decode a stored wishlist document. Anything that does not parse as a
/// name → positive-quantity map counts as absent; zero quantities are
/// dropped rather than kept around.
pub fn parse_wishlist(data: &str) -> Option<BTreeMap<String, u32>> {
    let mut wishlist: BTreeMap<String, u32> = serde_json::from_str(data).ok()?;
    wishlist.retain(|_, quantity| *quantity > 0);
    Some(wishlist)
}

pub fn load_wishlist() -> Option<BTreeMap<String, u32>> {
    let path = wishlist_file()?;
    let data = fs::read_to_string(path).ok()?;
    parse_wishlist(&data)
}

pub fn save_wishlist(wishlist: &BTreeMap<String, u32>) -> Result<(), PersistSaveError> {
    let path = wishlist_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(wishlist)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_documents_parse() {
        let parsed = parse_wishlist(r#"{"Pinecil": 1, "Rubber duck": 3}"#).unwrap();
        assert_eq!(parsed.get("Pinecil"), Some(&1));
        assert_eq!(parsed.get("Rubber duck"), Some(&3));
    }

    #[test]
    fn zero_quantities_are_dropped_on_load() {
        let parsed = parse_wishlist(r#"{"Pinecil": 0, "Rubber duck": 2}"#).unwrap();
        assert!(!parsed.contains_key("Pinecil"));
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn malformed_documents_read_as_absent() {
        assert!(parse_wishlist("").is_none());
        assert!(parse_wishlist("[1, 2, 3]").is_none());
        assert!(parse_wishlist(r#"{"Pinecil": -2}"#).is_none());
        assert!(parse_wishlist(r#"{"Pinecil": "lots"}"#).is_none());
    }

    #[test]
    fn stored_form_round_trips() {
        let mut wishlist = BTreeMap::new();
        wishlist.insert("Flipper Zero".to_string(), 1u32);
        wishlist.insert("ESP32 Kit".to_string(), 4u32);
        let json = serde_json::to_string_pretty(&wishlist).unwrap();
        assert_eq!(parse_wishlist(&json).unwrap(), wishlist);
    }
}
