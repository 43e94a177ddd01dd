// src/history.rs

use crate::cli::DecodeMode;
use crate::error::MinerError;
use crate::model::{ChangeKind, CommitRecord, FileChange};
use git2::{Commit, DiffFindOptions, DiffOptions, Oid, Repository};
use indicatif::ProgressBar;
use std::path::Path;
use tracing::{debug, info};

/// Forward-only walk over the non-merge commits of a repository, oldest
/// first. Commit ids are collected up front (so progress has a length);
/// the commits themselves are resolved and diffed lazily, one per `next()`.
pub struct GitHistory {
    repo: Repository,
    oids: Vec<Oid>,
    cursor: usize,
    bar: ProgressBar,
    decode: DecodeMode,
}

impl GitHistory {
    pub fn open(path: &Path, decode: DecodeMode) -> Result<Self, MinerError> {
        let repo = Repository::open(path).map_err(|source| MinerError::OpenRepository {
            path: path.to_path_buf(),
            source,
        })?;
        info!("mining repository at {}", path.display());

        let mut revwalk = repo.revwalk()?;
        revwalk.push_head()?;
        // Parents before children, so pairs come out in history order even
        // when committer timestamps tie.
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::REVERSE)?;
        let oids = revwalk.collect::<Result<Vec<_>, _>>()?;

        let bar = ProgressBar::new(oids.len() as u64);
        bar.set_message("Scanning commits");

        Ok(GitHistory {
            repo,
            oids,
            cursor: 0,
            bar,
            decode,
        })
    }

    fn record(&self, commit: &Commit) -> Result<CommitRecord, MinerError> {
        let parent_tree = match commit.parent_count() {
            0 => None,
            _ => Some(commit.parent(0)?.tree()?),
        };
        let tree = commit.tree()?;

        let mut opts = DiffOptions::new();
        opts.ignore_filemode(true);
        let mut diff =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;

        // Classify renames as such instead of an add/delete pair.
        let mut find_opts = DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            let kind = ChangeKind::from(delta.status());
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .and_then(|p| p.to_str())
                .map(String::from);

            // Only modifications can ever become pairs; skip the blob loads
            // for everything else.
            let (old_text, new_text) = if kind == ChangeKind::Modified {
                (
                    self.blob_text(delta.old_file().id()),
                    self.blob_text(delta.new_file().id()),
                )
            } else {
                (None, None)
            };

            files.push(FileChange {
                kind,
                path,
                old_text,
                new_text,
            });
        }

        Ok(CommitRecord {
            id: commit.id().to_string(),
            files,
        })
    }

    fn blob_text(&self, id: Oid) -> Option<String> {
        if id.is_zero() {
            return None;
        }
        let blob = self.repo.find_blob(id).ok()?;
        decode_text(blob.content(), self.decode)
    }
}

impl Iterator for GitHistory {
    type Item = Result<CommitRecord, MinerError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.oids.len() {
            let oid = self.oids[self.cursor];
            self.cursor += 1;
            self.bar.inc(1);

            let commit = match self.repo.find_commit(oid) {
                Ok(commit) => commit,
                Err(e) => return Some(Err(e.into())),
            };
            if commit.parent_count() > 1 {
                debug!("skipping merge commit {}", commit.id());
                continue;
            }
            return Some(self.record(&commit));
        }

        self.bar.finish_with_message("History exhausted");
        None
    }
}

/// Decode blob bytes according to the configured policy. `Drop` removes
/// invalid UTF-8 sequences and keeps the rest; `Strict` yields `None` so the
/// file is skipped.
fn decode_text(bytes: &[u8], mode: DecodeMode) -> Option<String> {
    match mode {
        DecodeMode::Strict => std::str::from_utf8(bytes).ok().map(str::to_owned),
        DecodeMode::Drop => {
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
            }
            Some(text)
        }
    }
}
