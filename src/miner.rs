// src/miner.rs

use crate::error::MinerError;
use crate::filter::FilterRules;
use crate::model::{CommitRecord, Pair};
use crate::writer::PairWriter;
use tracing::debug;

/// Outcome of a mining run
#[derive(Debug, Clone, Copy)]
pub struct MineSummary {
    pub collected: u32,
    pub target: u32,
}

impl MineSummary {
    pub fn target_reached(&self) -> bool {
        self.collected >= self.target
    }
}

/// Drive a commit source until the target count is reached or history runs
/// out. Pair ids are dense, 1-based, and assigned in traversal order. The
/// target is re-checked after every write, so the walk stops mid-commit
/// rather than finishing the current commit's remaining files.
///
/// Any source implementing the iteration contract works here; the git-backed
/// one is [`crate::history::GitHistory`].
pub fn mine<S>(
    commits: S,
    rules: &FilterRules,
    writer: &PairWriter,
    target: u32,
) -> Result<MineSummary, MinerError>
where
    S: IntoIterator<Item = Result<CommitRecord, MinerError>>,
{
    let mut collected = 0;
    if target == 0 {
        return Ok(MineSummary { collected, target });
    }

    'walk: for record in commits {
        let record = record?;
        for change in &record.files {
            if !rules.is_eligible(change) {
                continue;
            }
            // All three are present for any eligible change.
            let (Some(path), Some(old), Some(new)) = (
                change.path.as_deref(),
                change.old_text.as_deref(),
                change.new_text.as_deref(),
            ) else {
                continue;
            };

            collected += 1;
            writer.write(&Pair {
                id: collected,
                path,
                old_text: old,
                new_text: new,
                commit: record.short_id(),
            })?;

            if collected >= target {
                debug!("target of {target} pairs reached, stopping the walk");
                break 'walk;
            }
        }
    }

    Ok(MineSummary { collected, target })
}
