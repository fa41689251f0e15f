// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The single pending-timer slot owned by one wrapper instance.
///
/// Every armed timer gets a fresh generation id. A deferred invocation may
/// only clear the slot (and, for debounce, fire) while its own id is the one
/// stored, so a timer woken by the host after being superseded is inert.
#[derive(Debug)]
pub(crate) struct TimerSlot<H> {
    next_id: u64,
    pending: Option<Pending<H>>,
}

#[derive(Debug)]
struct Pending<H> {
    id: u64,
    handle: H,
}

impl<H> TimerSlot<H> {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: 0,
            pending: None,
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reserves the id for the next timer to be armed.
    pub(crate) fn reserve(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Stores `handle` as the live timer.
    ///
    /// The slot must be empty; callers `take` any previous handle first.
    pub(crate) fn arm(&mut self, id: u64, handle: H) {
        debug_assert!(self.pending.is_none());
        self.pending = Some(Pending { id, handle });
    }

    /// Removes the live timer, returning its handle for cancellation.
    pub(crate) fn take(&mut self) -> Option<H> {
        self.pending.take().map(|pending| pending.handle)
    }

    /// Clears the slot if timer `id` is still the live one.
    pub(crate) fn release(&mut self, id: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
