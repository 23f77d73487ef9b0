use std::sync::OnceLock;

use regex::Regex;

use crate::core::error::{AgentError, Result};

const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// What the model asked for in one completion: either run a tool or stop
/// with an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentDecision {
    Act { tool: String, input: String },
    Finish { answer: String },
}

#[allow(clippy::expect_used)]
fn action_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Tolerates step numbering ("Action 2:") and captures a multi-line
        // action input up to the end of the completion.
        Regex::new(r"(?s)Action\s*\d*\s*:\s*(.*?)\s*Action\s*\d*\s*Input\s*\d*\s*:\s*(.*)")
            .expect("action pattern is valid")
    })
}

/// Classifies one model completion against the Thought/Action grammar.
///
/// A completion carrying both an `Action:` and a `Final Answer:` is
/// ambiguous and rejected; a completion carrying neither is unparseable and
/// the raw text is surfaced in the error.
pub fn parse_decision(text: &str) -> Result<AgentDecision> {
    let has_final_answer = text.contains(FINAL_ANSWER_MARKER);
    let action = action_regex().captures(text);

    match (has_final_answer, action) {
        (true, Some(_)) => Err(AgentError::Parse(format!(
            "completion contains both an action and a final answer: {text}"
        ))),
        (true, None) => {
            let answer = text
                .rsplit(FINAL_ANSWER_MARKER)
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            Ok(AgentDecision::Finish { answer })
        }
        (false, Some(caps)) => {
            let tool = caps[1].trim().to_string();
            let input = caps[2].trim().trim_matches('"').trim().to_string();
            Ok(AgentDecision::Act { tool, input })
        }
        (false, None) => Err(AgentError::Parse(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        let text = "Thought: I should look this up.\n\
                    Action: Search\n\
                    Action Input: population of Canada";

        let decision = parse_decision(text).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Act {
                tool: "Search".to_string(),
                input: "population of Canada".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_final_answer() {
        let text = "Thought: I now know the final answer\n\
                    Final Answer: About 38 million people live in Canada.";

        let decision = parse_decision(text).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Finish {
                answer: "About 38 million people live in Canada.".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_numbered_action() {
        let text = "Action 2: Search\nAction 2 Input: Canada national anthem";

        let decision = parse_decision(text).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Act {
                tool: "Search".to_string(),
                input: "Canada national anthem".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_strips_quoted_input() {
        let text = "Action: Search\nAction Input: \"O Canada lyrics\"";

        let decision = parse_decision(text).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Act {
                tool: "Search".to_string(),
                input: "O Canada lyrics".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_ambiguous_completion() {
        let text = "Action: Search\nAction Input: something\nFinal Answer: 42";

        let err = parse_decision(text).unwrap_err();
        assert!(matches!(err, AgentError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_unstructured_text() {
        let err = parse_decision("I have no idea what to do.").unwrap_err();
        match err {
            AgentError::Parse(raw) => assert!(raw.contains("no idea")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_final_answer_keeps_text_after_last_marker() {
        let text = "Thought: the format says Final Answer: goes last\n\
                    Final Answer: O Canada";

        let decision = parse_decision(text).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Finish {
                answer: "O Canada".to_string(),
            }
        );
    }
}
