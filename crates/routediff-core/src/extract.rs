//! Metadata extraction from a Nuxt 2 build directory.
//!
//! Extraction is a pure function of on-disk state: the same unchanged
//! directory yields the same fingerprints on every run (timestamps aside).
//! Page files are visited in name order so discovery order is stable.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use time::OffsetDateTime;

use crate::errors::{ExtractError, ExtractResult};
use crate::layout;
use crate::model::{BuildSnapshot, PageFingerprint};

/// Scan `build_dir` and produce a [`BuildSnapshot`].
///
/// The directory must contain both `client.manifest.json` and a
/// `server/pages` directory, otherwise
/// [`ExtractError::NotRecognizedBuildFormat`] is returned. Every `.js`
/// file under `server/pages` is read in full and fingerprinted; any
/// unreadable file fails the whole extraction with [`ExtractError::Io`]
/// naming the offending path.
pub fn extract_build_snapshot(build_dir: &Path) -> ExtractResult<BuildSnapshot> {
    let manifest_path = build_dir.join(layout::CLIENT_MANIFEST);
    let pages_dir = build_dir.join(layout::SERVER_PAGES);

    if !manifest_path.is_file() || !pages_dir.is_dir() {
        return Err(ExtractError::not_recognized(build_dir));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(&pages_dir).map_err(|e| ExtractError::io(&pages_dir, e))? {
        let entry = entry.map_err(|e| ExtractError::io(&pages_dir, e))?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.ends_with(layout::PAGE_EXT) && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();

    let mut pages = BTreeMap::new();
    for name in names {
        let path = pages_dir.join(&name);
        let content = fs::read_to_string(&path).map_err(|e| ExtractError::io(&path, e))?;

        let fingerprint = PageFingerprint {
            hash: hash_page_content(&content),
            component_id: extract_component_id(&content),
            route: file_to_route(&name),
            size: content.len() as u64,
        };
        pages.insert(name, fingerprint);
    }

    Ok(BuildSnapshot {
        framework: crate::FRAMEWORK_NUXT2.to_string(),
        pages,
        timestamp: OffsetDateTime::now_utc().unix_timestamp(),
    })
}

/// SHA-256 of the page content, lowercase hex.
fn hash_page_content(content: &str) -> String {
    let mut h = Sha256::new();
    h.update(content.as_bytes());
    hex::encode(h.finalize())
}

/// Find the scoped component id in compiled page output: the first
/// `"xxxxxxxx"` (exactly 8 lowercase-hex chars) after the
/// `componentNormalizer` marker.
///
/// This leans on an implementation detail of the upstream compiler output
/// and is deliberately kept behind this one function so it can be swapped
/// without touching the diff logic.
pub fn extract_component_id(content: &str) -> Option<String> {
    let start = content.find(layout::COMPONENT_MARKER)? + layout::COMPONENT_MARKER.len();
    let bytes = content.as_bytes();

    let mut i = start;
    while i + 9 < bytes.len() {
        if bytes[i] == b'"'
            && bytes[i + 9] == b'"'
            && bytes[i + 1..i + 9]
                .iter()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            // All-ASCII range, so the slice is on char boundaries.
            return Some(content[i + 1..i + 9].to_string());
        }
        i += 1;
    }
    None
}

/// Derive the route from a page file name: `index.js` maps to `/`, any
/// other file to `/<name without extension>`.
///
/// Known-incomplete heuristic: nested routes and dynamic segments
/// (`blog/_slug.js`) are not resolved.
pub fn file_to_route(filename: &str) -> String {
    if filename == layout::INDEX_PAGE {
        return "/".to_string();
    }
    let stem = filename.strip_suffix(layout::PAGE_EXT).unwrap_or(filename);
    format!("/{stem}")
}
