//! Catalog serialization.
//!
//! The catalog is a JSON array with one object per achievement, in
//! assembly order. Unset optional fields never appear in the output.

use std::io::Write;

use sha2::{Digest, Sha256};

use super::types::Achievement;
use crate::error::CatalogError;

pub fn to_json(catalog: &[Achievement]) -> Result<String, CatalogError> {
    Ok(serde_json::to_string(catalog)?)
}

pub fn to_json_pretty(catalog: &[Achievement]) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

pub fn write_json<W: Write>(
    writer: W,
    catalog: &[Achievement],
    pretty: bool,
) -> Result<(), CatalogError> {
    if pretty {
        serde_json::to_writer_pretty(writer, catalog)?;
    } else {
        serde_json::to_writer(writer, catalog)?;
    }
    Ok(())
}

/// Parse a previously written catalog. Unknown requirement or event tags
/// are rejected.
pub fn from_json(json: &str) -> Result<Vec<Achievement>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// SHA-256 of the compact serialization, as lowercase hex.
///
/// Two runs over the same card database produce the same fingerprint.
pub fn fingerprint(catalog: &[Achievement]) -> Result<String, CatalogError> {
    let json = to_json(catalog)?;
    let digest = Sha256::digest(json.as_bytes());
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}
