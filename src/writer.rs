// src/writer.rs

use crate::error::MinerError;
use crate::model::Pair;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix used when the source filename carries no extension
const FALLBACK_SUFFIX: &str = ".txt";

/// Persists pairs under the output root, one directory per pair:
///
/// ```text
/// <root>/<id>/pair_<id>_v1<ext>      old content
/// <root>/<id>/pair_<id>_v2<ext>      new content
/// <root>/<id>/pair_<id>_mapping.xml  empty stub, created once
/// ```
pub struct PairWriter {
    root: PathBuf,
    pad: usize,
}

impl PairWriter {
    /// Create the output root. Ids are zero-padded to at least two digits,
    /// widening with the target count so directory names keep sorting
    /// numerically past 99 pairs.
    pub fn create(root: &Path, target: u32) -> Result<Self, MinerError> {
        fs::create_dir_all(root)?;
        let pad = target.to_string().len().max(2);
        Ok(PairWriter {
            root: root.to_path_buf(),
            pad,
        })
    }

    /// Write one pair. Content files of a colliding pair directory are
    /// overwritten; an existing mapping stub is left untouched.
    pub fn write(&self, pair: &Pair) -> Result<(), MinerError> {
        let suffix = match Path::new(pair.path).extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()),
            None => FALLBACK_SUFFIX.to_string(),
        };

        let dir = self.root.join(format!("{:0width$}", pair.id, width = self.pad));
        let stem = format!("pair_{:0width$}", pair.id, width = self.pad);
        let wrap = |source| MinerError::WritePair { id: pair.id, source };

        fs::create_dir_all(&dir).map_err(wrap)?;
        fs::write(dir.join(format!("{stem}_v1{suffix}")), pair.old_text).map_err(wrap)?;
        fs::write(dir.join(format!("{stem}_v2{suffix}")), pair.new_text).map_err(wrap)?;

        // The stub may already carry hand-made annotations; never truncate it.
        let mapping = dir.join(format!("{stem}_mapping.xml"));
        if !mapping.exists() {
            fs::File::create(&mapping).map_err(wrap)?;
        }

        println!("Saved pair {}: {} @ {}", pair.id, pair.path, pair.commit);
        Ok(())
    }
}
