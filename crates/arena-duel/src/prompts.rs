//! Instruction templates for the three arena roles
//!
//! The section markers in these templates ("Problem Statement:", "Reasoning:",
//! "Final Answer:") and the judge's canonical verdict sentence are load-bearing:
//! the parsers in [`crate::parse`] and [`crate::verdict`] match on them.

use crate::parse::{ProblemRecord, SolverOutput};

/// System instructions for both solver agents
pub const SOLVER_INSTRUCTIONS: &str = "You are an expert math tutor.
IMPORTANT: You are being evaluated on the CLARITY and DEPTH of your reasoning.
Format your output EXACTLY as follows:

Reasoning:
[Provide a detailed, step-by-step explanation. Explain the 'Why'.]

Final Answer:
[State the final numerical answer or set of values ONLY here.]
";

/// System instructions for the problem generator
pub const GENERATOR_INSTRUCTIONS: &str = "Create a difficult math problem (Algebra, Logic, or Probability).
Ensure the problem has a unique, verifiable solution.
Format:
Problem Statement: [Prob]
Final Answer: [Ans]";

/// Fixed directive sent to the generator each round
pub const GENERATOR_DIRECTIVE: &str = "Generate a hard math problem.";

/// Build the judge's system instructions, bound to both contestant names.
///
/// The verdict format sentence is the contract [`crate::verdict::extract_winner`]
/// scans for.
pub fn judge_instructions(name_1: &str, name_2: &str) -> String {
    format!(
        "You are a Strict Math Judge evaluating a duel between {name_1} and {name_2}.

**JUDGING RULES:**
1. **Accuracy:** Who got the correct answer? (Check for equivalent fractions/sets).
2. **Reasoning:** Who explained it better?
3. **Speed:** IGNORE SPEED unless it is a perfect tie.

**VERDICT FORMAT:**
If one is clearly better, conclude with: \"The winner of the match is: [Name]\"
If they are equal in accuracy and reasoning, conclude with: \"The winner of the match is: Tie\"
"
    )
}

/// Build the judge's input: the problem, the generator's reference answer,
/// and each contestant's answer and reasoning labeled by display name.
pub fn judge_transcript(
    problem: &ProblemRecord,
    name_1: &str,
    output_1: &SolverOutput,
    name_2: &str,
    output_2: &SolverOutput,
) -> String {
    format!(
        "Problem: {problem}
Generator's Proposed Answer: {reference}
--- {name_1} ---
Answer: {answer_1}
Reasoning: {reasoning_1}
--- {name_2} ---
Answer: {answer_2}
Reasoning: {reasoning_2}
",
        problem = problem.statement,
        reference = problem.reference_answer,
        answer_1 = output_1.final_answer,
        reasoning_1 = output_1.reasoning,
        answer_2 = output_2.final_answer,
        reasoning_2 = output_2.reasoning,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_instructions_bind_names() {
        let instructions = judge_instructions("Gpt-5.1", "Gemini-3-Pro-Preview");
        assert!(instructions.contains("between Gpt-5.1 and Gemini-3-Pro-Preview"));
        assert!(instructions.contains("The winner of the match is:"));
    }

    #[test]
    fn test_transcript_labels_slots() {
        let problem = ProblemRecord {
            statement: "What is 2+2?".to_string(),
            reference_answer: "4".to_string(),
        };
        let output_1 = SolverOutput {
            reasoning: "Add them.".to_string(),
            final_answer: "4".to_string(),
        };
        let output_2 = SolverOutput {
            reasoning: "Count up.".to_string(),
            final_answer: "5".to_string(),
        };
        let transcript = judge_transcript(&problem, "Alpha", &output_1, "Beta", &output_2);

        let alpha_at = transcript.find("--- Alpha ---").unwrap();
        let beta_at = transcript.find("--- Beta ---").unwrap();
        assert!(alpha_at < beta_at);
        assert!(transcript[alpha_at..beta_at].contains("Answer: 4"));
        assert!(transcript[beta_at..].contains("Answer: 5"));
    }
}
