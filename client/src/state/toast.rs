//! Transient toast notification state.
//!
//! Each `push` bumps a sequence number. Auto-dismiss timers carry the
//! sequence they were started for, so a stale timer never hides a newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: Option<String>,
    pub kind: ToastKind,
    pub seq: u64,
}

impl ToastState {
    /// Show `message`, replacing any current toast. Returns its sequence.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.kind = kind;
        self.seq
    }

    /// Hide the toast if `seq` is still the current one.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}
