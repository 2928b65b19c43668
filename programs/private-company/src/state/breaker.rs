use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::CompanyError;

/// Emergency stop. Toggled directly by any owner, outside the governance queue.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct CircuitBreaker {
    pub stopped: bool,
}

impl CircuitBreaker {
    /// Returns whether the flag changed; stopping twice is a no-op.
    pub fn stop(&mut self) -> bool {
        let changed = !self.stopped;
        self.stopped = true;
        changed
    }

    /// Returns whether the flag changed; resuming a running company is a no-op.
    pub fn resume(&mut self) -> bool {
        let changed = self.stopped;
        self.stopped = false;
        changed
    }

    /// Gate for submit/confirm.
    pub fn ensure_running(&self) -> Result<(), CompanyError> {
        if self.stopped {
            Err(CompanyError::ContractStopped)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_idempotently() {
        let mut breaker = CircuitBreaker::default();
        assert!(breaker.ensure_running().is_ok());

        assert!(breaker.stop());
        assert!(!breaker.stop());
        assert!(matches!(
            breaker.ensure_running(),
            Err(CompanyError::ContractStopped)
        ));

        assert!(breaker.resume());
        assert!(!breaker.resume());
        assert!(breaker.ensure_running().is_ok());
    }
}
