//! Cooldown and hard-mode windows after a finished heist.
//!
//! Times are offsets from the moment the heist finished; callers own the clock.
//! The next heist opens after the cooldown (longer solo). Hard mode is offered
//! for a fixed window starting when the next heist opens.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{COOLDOWN_CREW_MINUTES, COOLDOWN_SOLO_MINUTES, HARD_MODE_WINDOW_MINUTES};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownRules {
    pub solo_cooldown_minutes: u64,
    pub crew_cooldown_minutes: u64,
    pub hard_mode_window_minutes: u64,
}

impl Default for CooldownRules {
    fn default() -> Self {
        Self {
            solo_cooldown_minutes: COOLDOWN_SOLO_MINUTES,
            crew_cooldown_minutes: COOLDOWN_CREW_MINUTES,
            hard_mode_window_minutes: HARD_MODE_WINDOW_MINUTES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardModeWindow {
    /// Not yet open; opens with the next heist.
    Locked { opens_in: Duration },
    Open { closes_in: Duration },
    Expired,
}

impl CooldownRules {
    pub fn cooldown(&self, player_count: usize) -> Duration {
        let minutes = if player_count <= 1 {
            self.solo_cooldown_minutes
        } else {
            self.crew_cooldown_minutes
        };
        Duration::from_secs(minutes * 60)
    }

    /// Time left before the next heist, `None` once available.
    pub fn next_heist_in(&self, elapsed: Duration, player_count: usize) -> Option<Duration> {
        let remaining = self.cooldown(player_count).saturating_sub(elapsed);
        (!remaining.is_zero()).then_some(remaining)
    }

    pub fn hard_mode_window(&self, elapsed: Duration, player_count: usize) -> HardModeWindow {
        let opens_at = self.cooldown(player_count);
        let closes_at = opens_at + Duration::from_secs(self.hard_mode_window_minutes * 60);
        if elapsed < opens_at {
            HardModeWindow::Locked {
                opens_in: opens_at - elapsed,
            }
        } else if elapsed < closes_at {
            HardModeWindow::Open {
                closes_in: closes_at - elapsed,
            }
        } else {
            HardModeWindow::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(m: u64) -> Duration {
        Duration::from_secs(m * 60)
    }

    #[test]
    fn test_solo_cooldown_is_longer() {
        let rules = CooldownRules::default();
        assert_eq!(rules.next_heist_in(minutes(0), 1), Some(minutes(144)));
        assert_eq!(rules.next_heist_in(minutes(100), 1), Some(minutes(44)));
        assert_eq!(rules.next_heist_in(minutes(48), 3), None);
        assert_eq!(rules.next_heist_in(minutes(47), 2), Some(minutes(1)));
    }

    #[test]
    fn test_hard_mode_window() {
        let rules = CooldownRules::default();
        assert_eq!(
            rules.hard_mode_window(minutes(10), 2),
            HardModeWindow::Locked {
                opens_in: minutes(38)
            }
        );
        assert_eq!(
            rules.hard_mode_window(minutes(60), 2),
            HardModeWindow::Open {
                closes_in: minutes(36)
            }
        );
        assert_eq!(rules.hard_mode_window(minutes(96), 2), HardModeWindow::Expired);
        assert_eq!(
            rules.hard_mode_window(minutes(150), 1),
            HardModeWindow::Open {
                closes_in: minutes(42)
            }
        );
    }
}
