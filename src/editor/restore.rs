use crate::format::SelectionRange;

/// A selection waiting to be re-applied once the host has committed the
/// buffer it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRestore {
    pub ticket: u64,
    pub range: SelectionRange,
}

/// Single-slot register for deferred selection restores.
///
/// Scheduling replaces whatever was pending: only the most recent
/// formatting call can restore its selection.
#[derive(Debug, Default)]
pub struct SelectionRestore {
    pending: Option<PendingRestore>,
    next_ticket: u64,
}

impl SelectionRestore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, range: SelectionRange) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        if let Some(previous) = self.pending.replace(PendingRestore { ticket, range }) {
            log::debug!(
                "selection restore #{} superseded by #{ticket}",
                previous.ticket
            );
        }
        ticket
    }

    pub fn pending(&self) -> Option<&PendingRestore> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) -> Option<PendingRestore> {
        self.pending.take()
    }

    /// Takes the pending restore, if any. Called after the buffer update
    /// is visible.
    pub fn settle(&mut self) -> Option<PendingRestore> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_takes_pending_range_once() {
        let mut restore = SelectionRestore::new();
        let ticket = restore.schedule(SelectionRange::new(2, 6));

        assert!(restore.is_pending());
        let pending = restore.settle().unwrap();
        assert_eq!(pending.ticket, ticket);
        assert_eq!(pending.range, SelectionRange::new(2, 6));
        assert!(restore.settle().is_none());
    }

    #[test]
    fn newer_schedule_supersedes_older() {
        let mut restore = SelectionRestore::new();
        let first = restore.schedule(SelectionRange::new(0, 4));
        let second = restore.schedule(SelectionRange::new(1, 3));

        assert_ne!(first, second);
        assert_eq!(restore.pending().map(|p| p.ticket), Some(second));
        assert_eq!(restore.settle().map(|p| p.range), Some(SelectionRange::new(1, 3)));
    }

    #[test]
    fn cancel_drops_pending_restore() {
        let mut restore = SelectionRestore::new();
        restore.schedule(SelectionRange::new(0, 1));
        assert!(restore.cancel().is_some());
        assert!(restore.settle().is_none());
    }
}
