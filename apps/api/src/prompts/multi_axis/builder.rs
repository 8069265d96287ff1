use serde::{Deserialize, Serialize};

use super::base::MultiAxisTemplate;
use crate::prompts::builder::{substitute_additional_instructions, Message};
use crate::prompts::templates::{PromptVariables, CRITERIA_PLACEHOLDER, RANKING_KEYWORD_PLACEHOLDER};

/// Template and variables for a multi-axis build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAxisPromptConfig {
    pub template: MultiAxisTemplate,
    pub variables: PromptVariables,
}

impl MultiAxisPromptConfig {
    pub fn new(template: MultiAxisTemplate, variables: PromptVariables) -> Self {
        Self {
            template,
            variables,
        }
    }
}

/// Build the `[system, user]` message pair for a multi-axis evaluation
///
/// Every axis section gets its own keyword substituted. The per-call
/// ranking keyword and notes instructions do not apply here.
pub fn build_multi_axis_prompt(applicant_data: &str, config: &MultiAxisPromptConfig) -> [Message; 2] {
    let template = &config.template;
    let variables = &config.variables;

    tracing::debug!(
        template_id = %template.id,
        template_name = %template.name,
        axis_count = template.axes.len(),
        "Building multi-axis prompt"
    );
    tracing::debug!(
        "Axis keywords: {:?}",
        template
            .axes
            .iter()
            .map(|axis| axis.ranking_keyword.as_str())
            .collect::<Vec<_>>()
    );

    let mut system_message = template
        .system_intro
        .replace(CRITERIA_PLACEHOLDER, &variables.criteria_string);

    for axis in &template.axes {
        system_message.push_str("\n\n");
        system_message.push_str(
            &axis
                .prompt_section
                .replace(RANKING_KEYWORD_PLACEHOLDER, &axis.ranking_keyword),
        );
    }

    system_message.push_str("\n\n");
    system_message.push_str(&template.system_outro);

    let system_message = substitute_additional_instructions(
        &system_message,
        variables.additional_instructions.as_deref(),
    );

    // System first so the axes frame the applicant data
    [Message::system(system_message), Message::user(applicant_data)]
}
