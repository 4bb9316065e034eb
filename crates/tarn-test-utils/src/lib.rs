//! Test fixtures for exercising element ownership and finalization.
//!
//! Provides [`Tracked`], an element type with an observable identity, and
//! [`tracked_finalizer`], which builds a finalizer that records every id it
//! destroys. Together they let tests assert the exactly-once and
//! descending-order destruction guarantees without poking at container
//! internals.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, Mutex};

use tarn_core::Finalizer;

/// An element type with an observable identity.
///
/// `Default` yields `Tracked(0)` — the same zero a sparse fill produces for
/// numeric elements, so gap slots are distinguishable from real payloads by
/// id alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tracked(pub u32);

/// Shared record of finalized element ids, in invocation order.
pub type FinalizeLog = Arc<Mutex<Vec<u32>>>;

/// Build a finalizer that appends each destroyed [`Tracked`] id to a log.
///
/// Returns the finalizer and the log it writes to.
pub fn tracked_finalizer() -> (Finalizer<Tracked>, FinalizeLog) {
    let log: FinalizeLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let finalizer: Finalizer<Tracked> = Arc::new(move |element: Tracked| {
        sink.lock().expect("finalize log poisoned").push(element.0);
    });
    (finalizer, log)
}

/// Snapshot the ids a log has recorded so far.
pub fn logged(log: &FinalizeLog) -> Vec<u32> {
    log.lock().expect("finalize log poisoned").clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_default_is_zero() {
        assert_eq!(Tracked::default(), Tracked(0));
    }

    #[test]
    fn finalizer_records_in_invocation_order() {
        let (finalizer, log) = tracked_finalizer();
        finalizer(Tracked(3));
        finalizer(Tracked(1));
        finalizer(Tracked(2));
        assert_eq!(logged(&log), vec![3, 1, 2]);
    }
}
