//! Shared text formatting for the CLI bins.

use haggle_core::{Actor, TurnOutput};

/// "$12,500" style money rendering.
pub fn format_money(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render one transition's log with actor prefixes, one line per entry.
pub fn format_output(output: &TurnOutput) -> String {
    let mut text = String::new();
    for entry in &output.log {
        let prefix = match entry.actor {
            Actor::Player => "  you>",
            Actor::Rival => "rival>",
        };
        text.push_str(&format!("{} {}\n", prefix, entry.text));
    }
    text
}

/// One-line session summary for table headers.
pub fn format_session_line(output: &TurnOutput) -> String {
    let session = &output.session;
    format!(
        "bid {} | high bidder: {} | stalls used: {}",
        format_money(session.current_bid),
        session.last_bidder,
        session.stall_uses
    )
}
