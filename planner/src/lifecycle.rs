//! Heist lifecycle: `pending -> ready -> finished`, or `cancelled`.
//!
//! The planner itself is stateless; this only tells callers which moves are
//! legal and when allocation should be recomputed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeistStatus {
    Pending,
    Ready,
    Finished,
    Cancelled,
}

impl HeistStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, HeistStatus::Finished | HeistStatus::Cancelled)
    }

    /// Bags are re-planned on every join/leave while the heist is open.
    pub fn recomputes_allocation(self) -> bool {
        matches!(self, HeistStatus::Pending | HeistStatus::Ready)
    }

    pub fn can_transition(self, to: HeistStatus) -> bool {
        use HeistStatus::*;
        matches!(
            (self, to),
            (Pending, Ready)
                | (Ready, Pending)
                | (Pending, Finished)
                | (Ready, Finished)
                | (Pending, Cancelled)
                | (Ready, Cancelled)
        )
    }

    pub fn transition(self, to: HeistStatus) -> Result<HeistStatus, LifecycleError> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(LifecycleError { from: self, to })
        }
    }
}

impl fmt::Display for HeistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeistStatus::Pending => "pending",
            HeistStatus::Ready => "ready",
            HeistStatus::Finished => "finished",
            HeistStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let status = HeistStatus::Pending
            .transition(HeistStatus::Ready)
            .and_then(|s| s.transition(HeistStatus::Finished))
            .unwrap();
        assert_eq!(status, HeistStatus::Finished);
        assert!(status.is_terminal());
        assert!(!status.recomputes_allocation());
    }

    #[test]
    fn test_terminal_states_are_final() {
        for to in [
            HeistStatus::Pending,
            HeistStatus::Ready,
            HeistStatus::Finished,
            HeistStatus::Cancelled,
        ] {
            assert!(HeistStatus::Finished.transition(to).is_err());
            assert!(HeistStatus::Cancelled.transition(to).is_err());
        }
        let err = HeistStatus::Finished
            .transition(HeistStatus::Pending)
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot move heist from finished to pending");
    }

    #[test]
    fn test_ready_can_fall_back_to_pending() {
        assert_eq!(
            HeistStatus::Ready.transition(HeistStatus::Pending),
            Ok(HeistStatus::Pending)
        );
        assert!(HeistStatus::Pending.recomputes_allocation());
        assert!(HeistStatus::Ready.recomputes_allocation());
    }
}
