//! Latest-request-wins holder for the booked-date snapshot.
//!
//! A venue page kicks off a new availability fetch every time the viewed
//! venue changes. Responses can land out of order; only the newest request
//! may publish its result. [`SnapshotSlot`] enforces that with a generation
//! counter: each refresh hands out a [`FetchTicket`], and a commit is
//! accepted only while its ticket is still the current generation.

use crate::booked::BookedDates;

/// Proof of which refresh a fetch result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Single-owner slot for the current venue's booked dates.
///
/// Not a synchronization primitive — everything happens on one thread. The
/// generation counter exists because fetch *completions* interleave, not
/// because access does.
#[derive(Debug, Default)]
pub struct SnapshotSlot {
    generation: u64,
    current: Option<BookedDates>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh. Any ticket issued earlier is now stale and its
    /// commit will be rejected.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Publish a fetch result. Returns `false` and discards the data when
    /// the ticket has been superseded by a newer refresh.
    pub fn commit(&mut self, ticket: FetchTicket, booked: BookedDates) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.current = Some(booked);
        true
    }

    /// The published snapshot, if any refresh has completed.
    ///
    /// `None` means "not loaded yet" — callers that must validate anyway
    /// use [`BookedDates::empty`], which treats every day as free rather
    /// than blocking the calendar on a failed fetch.
    pub fn booked(&self) -> Option<&BookedDates> {
        self.current.as_ref()
    }

    /// Drop the snapshot and invalidate every outstanding ticket. Used when
    /// the venue page unmounts so a late response cannot resurrect stale
    /// data.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }
}
