//! Line-ordered macro merge queue
//!
//! Macro definitions and unaccounted-for expansion sites form one line-sorted
//! queue. The walk consumes it monotonically: items before a sibling's start line
//! are emitted ahead of that sibling, recursion claims the items inside composite
//! children, and scope exit drains up to the scope's end line. This is a stable
//! merge of line-ordered sequences, never post-hoc string scanning.

use rustc_hash::FxHashSet;

use crate::features::frontend::MacroExpansionSite;
use crate::features::reconcile::domain::MacroRecord;

/// One queued macro-introduced item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeItem {
    Definition(MacroRecord),
    Expansion(MacroExpansionSite),
}

impl MergeItem {
    pub fn line(&self) -> u32 {
        match self {
            MergeItem::Definition(record) => record.line,
            MergeItem::Expansion(site) => site.line,
        }
    }
}

/// Positional queue over a unit's macro-introduced records
#[derive(Debug, Default)]
pub struct MacroQueue {
    items: Vec<MergeItem>,
    next: usize,
}

impl MacroQueue {
    /// Build the queue. Expansion sites on a line where some cursor-derived entity
    /// starts are dropped: the cursor tree already accounts for those expansions.
    pub fn new(
        macros: Vec<MacroRecord>,
        expansions: Vec<MacroExpansionSite>,
        entity_start_lines: &FxHashSet<u32>,
    ) -> Self {
        let mut items: Vec<MergeItem> = macros.into_iter().map(MergeItem::Definition).collect();
        items.extend(
            expansions
                .into_iter()
                .filter(|site| !entity_start_lines.contains(&site.line))
                .map(MergeItem::Expansion),
        );
        items.sort_by_key(MergeItem::line);
        Self { items, next: 0 }
    }

    /// Items strictly before `line`
    pub fn take_before(&mut self, line: u32) -> Vec<MergeItem> {
        self.take_while(|l| l < line)
    }

    /// Items up to and including `line`
    pub fn take_through(&mut self, line: u32) -> Vec<MergeItem> {
        self.take_while(|l| l <= line)
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.items.len()
    }

    fn take_while(&mut self, keep: impl Fn(u32) -> bool) -> Vec<MergeItem> {
        let start = self.next;
        while self.next < self.items.len() && keep(self.items[self.next].line()) {
            self.next += 1;
        }
        self.items[start..self.next].to_vec()
    }
}
