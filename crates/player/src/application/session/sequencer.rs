//! Field sequencer
//!
//! Owns the active field index and the set of locked fields. The index only
//! moves forward and never passes the end of the field list.
//!
//! Every change of position bumps a generation counter. Auto-advance tickets
//! carry the generation they were issued under, so a timer that outlives its
//! field can never move the sequence.

use std::collections::HashSet;

use chatform_domain::FieldId;

/// Permission to advance past one display-only field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    index: usize,
    generation: u64,
}

impl AdvanceTicket {
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
pub struct FieldSequencer {
    active: usize,
    len: usize,
    locked: HashSet<FieldId>,
    generation: u64,
}

impl FieldSequencer {
    pub fn new(len: usize) -> Self {
        Self {
            active: 0,
            len,
            locked: HashSet::new(),
            generation: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.active >= self.len
    }

    /// Number of fields on screen: history plus the active one.
    pub fn visible_count(&self) -> usize {
        (self.active + 1).min(self.len)
    }

    /// Move to the next field. Returns the new index; a no-op at the end.
    pub fn advance(&mut self) -> usize {
        if !self.is_finished() {
            self.active += 1;
            self.generation += 1;
        }
        self.active
    }

    pub fn lock(&mut self, id: FieldId) {
        self.locked.insert(id);
    }

    pub fn is_locked(&self, id: &FieldId) -> bool {
        self.locked.contains(id)
    }

    pub fn locked_count(&self) -> usize {
        self.locked.len()
    }

    pub fn ticket(&self) -> AdvanceTicket {
        AdvanceTicket {
            index: self.active,
            generation: self.generation,
        }
    }

    /// Advance if `ticket` still describes the current position.
    pub fn redeem(&mut self, ticket: AdvanceTicket) -> bool {
        if ticket != self.ticket() || self.is_finished() {
            return false;
        }
        self.advance();
        true
    }

    /// Void every outstanding ticket without moving.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }
}
