//! # chroma-tests
//!
//! Parity and property testing for oxchroma.
//!
//! This crate provides:
//! - Reference wrappers around `palette` for sRGB transfer and matrices
//! - Error statistics for comparing buffers of values
//! - Deterministic test patterns (colors and chromaticities)
//! - Access to the JSON fixtures under `testdata/`
//!
//! ## Test Categories
//!
//! 1. **Parity**: sRGB transfer curve and RGB→XYZ matrix against `palette`
//! 2. **Round trips**: every preset, both precisions
//! 3. **Spectral**: sampling rules and daylight synthesis
//! 4. **Configuration**: color spaces declared in JSON
//! 5. **Batch**: slice kernels against the per-color API

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, compare_values};

use std::path::PathBuf;

/// Workspace `testdata/` directory
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("testdata")
}

/// Read and parse a JSON fixture from `testdata/`
pub fn load_fixture<T: serde::de::DeserializeOwned>(name: &str) -> anyhow::Result<T> {
    let path = testdata_dir().join(name);
    let text = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&text)?)
}
