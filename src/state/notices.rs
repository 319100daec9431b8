//! Single-slot notification banner state.
//!
//! DESIGN
//! ======
//! The page shows at most one banner at a time. Showing a new banner evicts
//! the current one immediately, but the evicted banner's dismissal timer may
//! still be pending. Each banner therefore carries a sequence number, and the
//! timed transitions (`begin_exit`, `dismiss`) are no-ops unless the sequence
//! still matches the occupant. A stale timer firing against a newer banner
//! cannot cut its lifetime short.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// How long a banner stays fully visible before its exit phase starts.
pub const NOTICE_VISIBLE_MS: u64 = 5000;

/// Length of the slide-out phase. The banner is removed once it elapses.
pub const NOTICE_EXIT_MS: u64 = 300;

/// Visual category of a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// One banner occupying the notification slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub text: String,
    pub kind: NoticeKind,
    /// True once the exit phase has started; drives the slide-out class.
    pub leaving: bool,
}

/// The notification slot plus the sequence counter for staleness checks.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_seq: u64,
}

impl NoticeState {
    /// Put a new banner in the slot, evicting any occupant. Returns the
    /// sequence number the caller needs for the timed transitions.
    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(Notice {
            seq,
            text: text.into(),
            kind,
            leaving: false,
        });
        seq
    }

    /// Start the exit phase for the banner with the given sequence. Returns
    /// false when the banner was already replaced or is already leaving.
    pub fn begin_exit(&mut self, seq: u64) -> bool {
        match &mut self.current {
            Some(notice) if notice.seq == seq && !notice.leaving => {
                notice.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Remove the banner with the given sequence. Returns false when the slot
    /// holds a different banner (or nothing).
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|notice| notice.seq == seq) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
