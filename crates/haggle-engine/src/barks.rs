//! Bark-trigger selection and the graduated patience flavor lines.

use haggle_core::{BarkTrigger, DecisionReason};

/// The bark matching a rival fold. Patience exhaustion and budget
/// exhaustion read very differently at the table.
pub fn fold_bark(reason: DecisionReason) -> BarkTrigger {
    match reason {
        DecisionReason::LostPatience => BarkTrigger::RivalFoldPatience,
        _ => BarkTrigger::RivalFoldBudget,
    }
}

/// Flavor line appended after a rival bid when their patience is running
/// out. Returns None while the rival is still comfortable.
pub fn pressure_line(name: &str, patience: i32) -> Option<String> {
    if patience < 20 {
        Some(format!("{} looks about ready to walk away.", name))
    } else if patience < 30 {
        Some(format!("{} grumbles about the price.", name))
    } else if patience < 50 {
        Some(format!("{} shifts impatiently.", name))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_barks_match_reason() {
        assert_eq!(
            fold_bark(DecisionReason::LostPatience),
            BarkTrigger::RivalFoldPatience
        );
        assert_eq!(
            fold_bark(DecisionReason::NotWorthIt),
            BarkTrigger::RivalFoldBudget
        );
    }

    #[test]
    fn test_pressure_thresholds() {
        assert!(pressure_line("Rex", 50).is_none());
        assert!(pressure_line("Rex", 49).unwrap().contains("shifts"));
        assert!(pressure_line("Rex", 29).unwrap().contains("grumbles"));
        assert!(pressure_line("Rex", 19).unwrap().contains("walk away"));
    }
}
