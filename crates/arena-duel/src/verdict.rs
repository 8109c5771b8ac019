//! Winner extraction from judge verdicts

use serde::{Deserialize, Serialize};

/// The outcome derived from a judge's free-text verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// A named contestant won; carries the matched display name
    Contestant(String),
    /// The judge declared a tie
    Tie,
    /// No winner or tie could be extracted; the round credits nobody
    Unknown,
}

/// Extract the winner from a verdict by case-insensitive scanning.
///
/// Check order is significant and deliberately preserved: the tie+winner
/// co-occurrence check runs first, so a verdict phrased with both words is
/// never misattributed to a named contestant. This means a verdict that
/// names a winner while also mentioning "a tie in reasoning style" is
/// classified as Tie.
pub fn extract_winner(verdict: &str, name_1: &str, name_2: &str) -> Winner {
    let verdict = verdict.to_lowercase();

    if verdict.contains("tie") && verdict.contains("winner") {
        return Winner::Tie;
    }
    if verdict.contains(&format!("winner of the match is: {}", name_1.to_lowercase())) {
        return Winner::Contestant(name_1.to_string());
    }
    if verdict.contains(&format!("winner of the match is: {}", name_2.to_lowercase())) {
        return Winner::Contestant(name_2.to_string());
    }
    if verdict.contains("is: tie") {
        return Winner::Tie;
    }
    Winner::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_1: &str = "Alpha";
    const NAME_2: &str = "Beta";

    #[test]
    fn test_named_winner_first_slot() {
        let winner = extract_winner(
            "Both solved it, but only one explained it well.\nThe winner of the match is: Alpha",
            NAME_1,
            NAME_2,
        );
        assert_eq!(winner, Winner::Contestant("Alpha".to_string()));
    }

    #[test]
    fn test_named_winner_second_slot() {
        let winner = extract_winner("The winner of the match is: Beta", NAME_1, NAME_2);
        assert_eq!(winner, Winner::Contestant("Beta".to_string()));
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let winner = extract_winner("THE WINNER OF THE MATCH IS: ALPHA", NAME_1, NAME_2);
        assert_eq!(winner, Winner::Contestant("Alpha".to_string()));
    }

    #[test]
    fn test_canonical_tie() {
        let winner = extract_winner("The winner of the match is: Tie", NAME_1, NAME_2);
        assert_eq!(winner, Winner::Tie);
    }

    #[test]
    fn test_bare_tie_phrase() {
        let winner = extract_winner("Equal in every respect, so it is: tie.", NAME_1, NAME_2);
        assert_eq!(winner, Winner::Tie);
    }

    #[test]
    fn test_tie_precedence_over_named_winner() {
        // Rule 1 fires before the named-winner checks even though a name appears.
        let winner = extract_winner(
            "Despite a tie in reasoning style, the winner of the match is: Alpha",
            NAME_1,
            NAME_2,
        );
        assert_eq!(winner, Winner::Tie);
    }

    #[test]
    fn test_unknown_verdict() {
        let winner = extract_winner(
            "Both answers were incorrect and neither deserves credit.",
            NAME_1,
            NAME_2,
        );
        assert_eq!(winner, Winner::Unknown);
    }
}
