// Evaluation prompt assembly
//
// Resolves a caller request against the prompt library and returns the
// messages to send plus the keywords the score parser needs afterwards.

use serde::{Deserialize, Serialize};

use super::builder::{build_prompt, get_ranking_keyword, Message, PromptConfig};
use super::multi_axis::{build_multi_axis_prompt, AxisKeyword, MultiAxisPromptConfig};
use super::registry::PromptLibrary;
use super::templates::{PromptTemplate, PromptVariables};

/// Rubric used for multi-axis requests that arrive without one
pub const DEFAULT_MULTI_AXIS_CRITERIA: &str = "Evaluate the candidate for the SPAR research program.";
/// Instructions used for multi-axis requests that arrive without any
pub const DEFAULT_MULTI_AXIS_INSTRUCTIONS: &str =
    "Return a score from 1-5 for each of the evaluation axes.";

/// Everything a caller supplies to prepare one evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationPromptRequest {
    pub applicant_data: String,
    #[serde(default)]
    pub criteria_string: String,
    #[serde(default)]
    pub template_id: Option<String>,
    /// Replaces the library lookup for single-axis requests
    #[serde(default)]
    pub custom_template: Option<PromptTemplate>,
    #[serde(default)]
    pub ranking_keyword: Option<String>,
    #[serde(default)]
    pub additional_instructions: Option<String>,
    #[serde(default)]
    pub notes_instructions: Option<String>,
    #[serde(default)]
    pub use_multi_axis: bool,
}

/// Keywords the response parser should search for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScoreKeywords {
    Single { ranking_keyword: String },
    MultiAxis { axes: Vec<AxisKeyword> },
}

/// Prepared evaluation: messages ready to send and how to read the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationPrompt {
    pub template_id: String,
    pub messages: Vec<Message>,
    pub keywords: ScoreKeywords,
}

/// Resolve templates and build the prompt for an evaluation request
pub fn build_evaluation_prompt(
    request: &EvaluationPromptRequest,
    library: &PromptLibrary,
) -> EvaluationPrompt {
    let criteria_string = request.criteria_string.replace("<br>", "\n");
    let template_id = request.template_id.as_deref().unwrap_or_default();

    if request.use_multi_axis {
        let template = library.multi_axis.get(template_id).clone();
        tracing::debug!("Using multi-axis template: {} - {}", template.id, template.name);

        let criteria_string = if criteria_string.trim().is_empty() {
            DEFAULT_MULTI_AXIS_CRITERIA.to_string()
        } else {
            criteria_string
        };
        let additional_instructions = match request.additional_instructions.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => DEFAULT_MULTI_AXIS_INSTRUCTIONS.to_string(),
        };
        let variables = PromptVariables::new(criteria_string)
            .with_additional_instructions(additional_instructions);

        let axes = template.axis_ranking_keywords();
        let config = MultiAxisPromptConfig::new(template, variables);
        let messages = build_multi_axis_prompt(&request.applicant_data, &config);

        return EvaluationPrompt {
            template_id: config.template.id,
            messages: Vec::from(messages),
            keywords: ScoreKeywords::MultiAxis { axes },
        };
    }

    let template = match &request.custom_template {
        Some(custom) => custom.clone(),
        None => library.single.get(template_id).clone(),
    };
    tracing::debug!("Using template: {} - {}", template.id, template.name);

    let variables = PromptVariables {
        criteria_string,
        ranking_keyword: request.ranking_keyword.clone(),
        additional_instructions: request.additional_instructions.clone(),
        notes_instructions: request.notes_instructions.clone(),
    };
    let config = PromptConfig::new(template, variables);
    let messages = build_prompt(&request.applicant_data, &config);
    let ranking_keyword = get_ranking_keyword(&config).to_string();
    tracing::debug!("Using ranking keyword: {}", ranking_keyword);

    EvaluationPrompt {
        template_id: config.template.id,
        messages: Vec::from(messages),
        keywords: ScoreKeywords::Single { ranking_keyword },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::builder::Role;

    fn request(applicant_data: &str, criteria: &str) -> EvaluationPromptRequest {
        EvaluationPromptRequest {
            applicant_data: applicant_data.to_string(),
            criteria_string: criteria.to_string(),
            ..EvaluationPromptRequest::default()
        }
    }

    #[test]
    fn single_axis_defaults_to_academic() {
        let prompt = build_evaluation_prompt(&request("Ada", "GPA"), &PromptLibrary::builtin());

        assert_eq!(prompt.template_id, "academic");
        assert_eq!(prompt.messages.len(), 2);
        assert_eq!(prompt.messages[0].role, Role::User);
        assert_eq!(
            prompt.keywords,
            ScoreKeywords::Single {
                ranking_keyword: "FINAL_RANKING".to_string()
            }
        );
    }

    #[test]
    fn line_breaks_in_criteria_become_newlines() {
        let prompt = build_evaluation_prompt(
            &request("Ada", "Research<br>Leadership"),
            &PromptLibrary::builtin(),
        );

        assert!(prompt.messages[1].content.contains("rubric: Research\nLeadership"));
    }

    #[test]
    fn custom_template_wins_over_template_id() {
        let mut req = request("Ada", "GPA");
        req.template_id = Some("academic".to_string());
        req.custom_template = Some(PromptTemplate {
            id: "custom".to_string(),
            name: "Custom".to_string(),
            description: String::new(),
            system_message: "Judge {criteria_string}; finish with {ranking_keyword} = N".to_string(),
            ranking_keyword: "VERDICT".to_string(),
            additional_instructions: None,
        });

        let prompt = build_evaluation_prompt(&req, &PromptLibrary::builtin());

        assert_eq!(prompt.template_id, "custom");
        assert_eq!(prompt.messages[1].content, "Judge GPA; finish with VERDICT = N");
    }

    #[test]
    fn keyword_override_is_reported_to_parser() {
        let mut req = request("Ada", "GPA");
        req.ranking_keyword = Some("SCORE".to_string());
        req.notes_instructions = Some("Summarize leadership experience".to_string());

        let prompt = build_evaluation_prompt(&req, &PromptLibrary::builtin());

        assert_eq!(
            prompt.keywords,
            ScoreKeywords::Single {
                ranking_keyword: "SCORE".to_string()
            }
        );
        assert!(prompt.messages[1].content.contains("[EVALUATION_NOTES]"));
        assert!(prompt.messages[1].content.contains("MUST end with the SCORE line."));
    }

    #[test]
    fn multi_axis_fills_blank_criteria_and_instructions() {
        let mut req = request("Ada", "  ");
        req.use_multi_axis = true;
        req.ranking_keyword = Some("SCORE".to_string());

        let prompt = build_evaluation_prompt(&req, &PromptLibrary::builtin());
        let system = &prompt.messages[0].content;

        assert_eq!(prompt.template_id, "multi_axis_spar");
        assert_eq!(prompt.messages[0].role, Role::System);
        assert!(system.contains(DEFAULT_MULTI_AXIS_CRITERIA));
        assert!(system.ends_with(DEFAULT_MULTI_AXIS_INSTRUCTIONS));
        assert!(!system.contains("SCORE"));
    }

    #[test]
    fn multi_axis_reports_every_axis_keyword() {
        let mut req = request("Ada", "Research focus");
        req.use_multi_axis = true;
        req.template_id = Some("multi_axis_academic".to_string());

        let prompt = build_evaluation_prompt(&req, &PromptLibrary::builtin());

        match prompt.keywords {
            ScoreKeywords::MultiAxis { axes } => {
                assert_eq!(axes.len(), 6);
                assert_eq!(axes[0].ranking_keyword, "GENERAL_PREMISE_RATING");
            }
            other => panic!("expected multi-axis keywords, got {other:?}"),
        }
        assert_eq!(prompt.template_id, "multi_axis_academic");
    }

    #[test]
    fn keywords_serialize_with_mode_tag() {
        let json = serde_json::to_value(ScoreKeywords::Single {
            ranking_keyword: "FINAL_RANKING".to_string(),
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"mode": "single", "ranking_keyword": "FINAL_RANKING"})
        );
    }
}
