// src/model.rs

/// How a commit touched a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Modified,
    Renamed,
    Copied,
    Other,
}

impl From<git2::Delta> for ChangeKind {
    fn from(status: git2::Delta) -> Self {
        match status {
            git2::Delta::Added => ChangeKind::Added,
            git2::Delta::Deleted => ChangeKind::Deleted,
            git2::Delta::Modified => ChangeKind::Modified,
            git2::Delta::Renamed => ChangeKind::Renamed,
            git2::Delta::Copied => ChangeKind::Copied,
            _ => ChangeKind::Other,
        }
    }
}

/// A single file touched by a commit
#[derive(Debug, Clone)]
pub struct FileChange {
    pub kind: ChangeKind,
    /// Post-change path relative to the repository root (pre-change path for deletions)
    pub path: Option<String>,
    /// Full pre-change contents; absent for added files and undecodable blobs
    pub old_text: Option<String>,
    /// Full post-change contents; absent for deleted files and undecodable blobs
    pub new_text: Option<String>,
}

/// A non-merge commit with its file changes, in diff order
#[derive(Debug, Clone)]
pub struct CommitRecord {
    /// Full hex id of the commit
    pub id: String,
    pub files: Vec<FileChange>,
}

impl CommitRecord {
    /// Abbreviated commit id for progress output
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(7)]
    }
}

/// A before/after sample about to be persisted
#[derive(Debug)]
pub struct Pair<'a> {
    /// Dense, 1-based id assigned in traversal order
    pub id: u32,
    pub path: &'a str,
    pub old_text: &'a str,
    pub new_text: &'a str,
    /// Short id of the originating commit; shown in progress output, not persisted
    pub commit: &'a str,
}
