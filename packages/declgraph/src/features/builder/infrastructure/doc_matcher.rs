//! Positional doc-comment matching
//!
//! Each record documents at most one entity: leading styles match the entity
//! starting on the line right after the comment ends (a blank line or any
//! intervening entity breaks the match), trailing comments match the entity whose
//! declaration shares their line. Whatever stays unmatched is dropped, observable
//! only through a debug diagnostic.

use rustc_hash::FxHashMap;

use crate::features::reconcile::domain::{CommentStyle, DocCommentRecord};

/// Line-indexed view over a unit's doc comments
#[derive(Debug, Default)]
pub struct CommentTable {
    records: Vec<DocCommentRecord>,
    taken: Vec<bool>,
    /// Entity start line -> leading record index
    leading: FxHashMap<u32, usize>,
    /// Entity start line -> trailing record index
    trailing: FxHashMap<u32, usize>,
}

impl CommentTable {
    pub fn new(comments: Vec<DocCommentRecord>) -> Self {
        let mut leading = FxHashMap::default();
        let mut trailing = FxHashMap::default();
        for (idx, record) in comments.iter().enumerate() {
            match record.style {
                // On collision the later record wins: it sits closer to the entity
                CommentStyle::Block | CommentStyle::Line => {
                    leading.insert(record.line + 1, idx);
                }
                CommentStyle::TrailingLine => {
                    trailing.insert(record.line, idx);
                }
            }
        }
        let taken = vec![false; comments.len()];
        Self {
            records: comments,
            taken,
            leading,
            trailing,
        }
    }

    /// Consume the comment documenting an entity that starts on `line`, if any.
    pub fn take_for(&mut self, line: u32) -> Option<String> {
        let idx = self
            .leading
            .get(&line)
            .or_else(|| self.trailing.get(&line))
            .copied()?;
        if self.taken[idx] {
            return None;
        }
        self.taken[idx] = true;
        debug_assert!(self.records[idx].matches(line));
        Some(self.records[idx].text.clone())
    }

    /// Records no entity claimed
    pub fn unmatched(&self) -> impl Iterator<Item = &DocCommentRecord> {
        self.records
            .iter()
            .zip(&self.taken)
            .filter(|(_, taken)| !**taken)
            .map(|(record, _)| record)
    }
}
