//! Payment gate state for one request: the latest scan plus whether it was paid for.
//!
//! Payment is simulated: confirming it just opens the gate. No settlement step exists.
//! The gate only decides the `LockState`; `render_scan` drops the details while locked.

use crate::engine::ScanResult;
use crate::render::LockState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSession {
    unlocked: bool,
    last_scan: Option<ScanResult>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers the latest scan, replacing any earlier one, and hands it back.
    /// The gate state is unchanged.
    pub fn record_scan(&mut self, result: ScanResult) -> &ScanResult {
        self.last_scan.insert(result)
    }

    /// Opens the gate after a (simulated) payment confirmation.
    pub fn confirm_payment(&mut self) {
        self.unlocked = true;
    }

    pub fn lock_state(&self) -> LockState {
        if self.unlocked {
            LockState::Unlocked
        } else {
            LockState::Locked
        }
    }
}
