use serde::{Deserialize, Serialize};

/// Static negotiating temperament from the rival's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Aggressive,
    Passive,
    Collector,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Aggressive, Strategy::Passive, Strategy::Collector];

    /// Patience lost each time this rival has to think about a bid.
    /// Collectors stay calm only for cars they actually want.
    pub fn patience_drain(self, interest: i32) -> i32 {
        match self {
            Strategy::Aggressive => 15,
            Strategy::Passive => 5,
            Strategy::Collector => {
                if interest > 70 {
                    5
                } else {
                    10
                }
            }
        }
    }

    /// Raise sizing, as a multiple of the base bid increment.
    pub fn raise_factor(self, interest: i32) -> u32 {
        match self {
            Strategy::Aggressive => 2,
            Strategy::Passive => 1,
            Strategy::Collector => {
                if interest > 70 {
                    2
                } else {
                    1
                }
            }
        }
    }

    /// Flat bonus to the willingness roll in the decision table.
    pub fn willingness_bonus(self, interest: i32) -> i32 {
        match self {
            Strategy::Aggressive => 35,
            Strategy::Passive => 0,
            Strategy::Collector => {
                if interest > 70 {
                    15
                } else {
                    5
                }
            }
        }
    }
}

/// A rival as stored in their profile, before an encounter starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RivalProfile {
    pub name: String,
    pub strategy: Strategy,
    pub base_patience: i32,
    pub budget: u32,
}

/// Per-encounter rival resources. Patience only goes down; budget is a
/// hard ceiling the rival will never bid above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RivalState {
    pub name: String,
    pub strategy: Strategy,
    /// Clamped to [0, 100]; reaching 0 ends the auction.
    pub patience: i32,
    pub budget: u32,
    /// Static per-encounter affinity for this car, [0, 100].
    pub interest: i32,
}

impl RivalState {
    pub fn from_profile(profile: &RivalProfile, interest: i32) -> Self {
        Self {
            name: profile.name.clone(),
            strategy: profile.strategy,
            patience: profile.base_patience.clamp(0, 100),
            budget: profile.budget,
            interest: interest.clamp(0, 100),
        }
    }

    /// Lower patience by `amount`, never below zero.
    pub fn drain_patience(&mut self, amount: i32) {
        self.patience = (self.patience - amount.max(0)).max(0);
    }

    pub fn reduce_budget(&mut self, amount: u32) {
        self.budget = self.budget.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(strategy: Strategy) -> RivalProfile {
        RivalProfile {
            name: "Rex".to_string(),
            strategy,
            base_patience: 100,
            budget: 15000,
        }
    }

    #[test]
    fn test_collector_drain_depends_on_interest() {
        assert_eq!(Strategy::Collector.patience_drain(71), 5);
        assert_eq!(Strategy::Collector.patience_drain(70), 10);
        assert_eq!(Strategy::Aggressive.patience_drain(0), 15);
        assert_eq!(Strategy::Passive.patience_drain(100), 5);
    }

    #[test]
    fn test_patience_floors_at_zero() {
        let mut state = RivalState::from_profile(&profile(Strategy::Passive), 50);
        state.drain_patience(250);
        assert_eq!(state.patience, 0);
        state.drain_patience(5);
        assert_eq!(state.patience, 0);
    }

    #[test]
    fn test_negative_drain_is_ignored() {
        let mut state = RivalState::from_profile(&profile(Strategy::Passive), 50);
        state.drain_patience(-10);
        assert_eq!(state.patience, 100);
    }

    #[test]
    fn test_budget_never_underflows() {
        let mut state = RivalState::from_profile(&profile(Strategy::Aggressive), 50);
        state.reduce_budget(20000);
        assert_eq!(state.budget, 0);
    }

    #[test]
    fn test_profile_values_are_clamped() {
        let mut p = profile(Strategy::Collector);
        p.base_patience = 400;
        let state = RivalState::from_profile(&p, 130);
        assert_eq!(state.patience, 100);
        assert_eq!(state.interest, 100);
    }
}
