//! Pending overlay for submitted-but-unconfirmed requests.

use std::collections::HashMap;
use std::sync::Mutex;

use log::debug;
use uuid::Uuid;

/// One locally recorded delta awaiting backend confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelta {
    pub submission_id: Uuid,
    /// Eggs debited by a submitted sell request.
    pub eggs_debited: u64,
}

/// Explicit overlay of local deltas layered over the last authoritative
/// wallet snapshot.
///
/// A submitted sell debits eggs here so the UI reflects it immediately;
/// the overlay is applied on read and discarded wholesale when the next
/// authoritative fetch arrives, rather than being trusted as fact. The
/// backend remains the only authority on the real balance.
#[derive(Debug, Default)]
pub struct PendingLedger {
    deltas: Mutex<HashMap<Uuid, PendingDelta>>,
}

impl PendingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pending egg debit, returning its submission id.
    pub fn record_debit(&self, eggs: u64) -> Uuid {
        let submission_id = Uuid::new_v4();
        let delta = PendingDelta {
            submission_id,
            eggs_debited: eggs,
        };
        self.deltas
            .lock()
            .unwrap()
            .insert(submission_id, delta);
        debug!("Recorded pending debit of {} eggs ({})", eggs, submission_id);
        submission_id
    }

    /// Removes one delta (a submission the backend rejected outright).
    pub fn discard(&self, submission_id: Uuid) {
        self.deltas.lock().unwrap().remove(&submission_id);
    }

    /// Total eggs debited by pending submissions.
    pub fn total_debited(&self) -> u64 {
        self.deltas
            .lock()
            .unwrap()
            .values()
            .map(|d| d.eggs_debited)
            .sum()
    }

    /// Applies the overlay to an authoritative balance, saturating at
    /// zero (the backend may already have absorbed a debit).
    pub fn apply(&self, authoritative_balance: u64) -> u64 {
        authoritative_balance.saturating_sub(self.total_debited())
    }

    /// Discards every delta. Called when a fresh authoritative snapshot
    /// arrives; whatever the backend accepted is now reflected there.
    pub fn reconcile(&self) {
        let mut deltas = self.deltas.lock().unwrap();
        if !deltas.is_empty() {
            debug!("Reconciling {} pending deltas against fresh snapshot", deltas.len());
            deltas.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_apply_debits() {
        let ledger = PendingLedger::new();
        ledger.record_debit(10);
        ledger.record_debit(5);

        assert_eq!(ledger.total_debited(), 15);
        assert_eq!(ledger.apply(100), 85);
    }

    #[test]
    fn apply_saturates_at_zero() {
        let ledger = PendingLedger::new();
        ledger.record_debit(50);
        assert_eq!(ledger.apply(30), 0);
    }

    #[test]
    fn discard_removes_single_delta() {
        let ledger = PendingLedger::new();
        let keep = ledger.record_debit(10);
        let drop = ledger.record_debit(7);

        ledger.discard(drop);
        assert_eq!(ledger.total_debited(), 10);
        ledger.discard(keep);
        assert!(ledger.is_empty());
    }

    #[test]
    fn reconcile_clears_everything() {
        let ledger = PendingLedger::new();
        ledger.record_debit(10);
        ledger.record_debit(20);

        ledger.reconcile();
        assert!(ledger.is_empty());
        assert_eq!(ledger.apply(100), 100);
    }
}
