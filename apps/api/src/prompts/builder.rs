// Prompt builder
//
// Turns a template plus per-call variables into the message list sent to
// the model. Substitution is plain literal replacement applied in a fixed
// order; each step works on the output of the previous one.

use serde::{Deserialize, Serialize};

use super::templates::{
    PromptTemplate, PromptVariables, ADDITIONAL_INSTRUCTIONS_PLACEHOLDER, CRITERIA_PLACEHOLDER,
    NOTES_PLACEHOLDER, RANKING_KEYWORD_PLACEHOLDER,
};

/// Marker opening the optional notes block in the model's answer
pub const NOTES_START_MARKER: &str = "[EVALUATION_NOTES]";
/// Marker closing the optional notes block
pub const NOTES_END_MARKER: &str = "[END_EVALUATION_NOTES]";

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::System => "system",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Template and variables for a single build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub template: PromptTemplate,
    pub variables: PromptVariables,
}

impl PromptConfig {
    pub fn new(template: PromptTemplate, variables: PromptVariables) -> Self {
        Self {
            template,
            variables,
        }
    }
}

/// Build the `[user, system]` message pair for an evaluation
///
/// The applicant data is passed through untouched. Missing optional
/// variables remove their placeholder instead of failing.
///
/// # Example
/// ```
/// use evalprompt_api::prompts::{build_prompt, get_template, PromptConfig, PromptVariables};
///
/// let config = PromptConfig::new(get_template("academic"), PromptVariables::new("GPA above 3.5"));
/// let messages = build_prompt("Applicant: Ada", &config);
///
/// assert_eq!(messages[0].content, "Applicant: Ada");
/// assert!(messages[1].content.contains("FINAL_RANKING = [integer from 1-5]"));
/// ```
pub fn build_prompt(applicant_data: &str, config: &PromptConfig) -> [Message; 2] {
    let template = &config.template;
    let variables = &config.variables;
    let keyword = get_ranking_keyword(config);

    tracing::debug!(
        template_id = %template.id,
        ranking_keyword = %keyword,
        "Building evaluation prompt"
    );

    let system_message = template
        .system_message
        .replace(CRITERIA_PLACEHOLDER, &variables.criteria_string)
        .replace(RANKING_KEYWORD_PLACEHOLDER, keyword);

    let notes_section = match non_blank(variables.notes_instructions.as_deref()) {
        Some(notes) => format!(
            "\n\n   Then, provide structured evaluation notes between {NOTES_START_MARKER} and \
             {NOTES_END_MARKER} markers summarizing:\n   {notes}\n\n   NOTE: These notes are \
             ADDITIONAL analysis. You still MUST end with the {keyword} line."
        ),
        None => String::new(),
    };
    let system_message = system_message.replace(NOTES_PLACEHOLDER, &notes_section);

    let system_message = substitute_additional_instructions(
        &system_message,
        variables.additional_instructions.as_deref(),
    );

    [Message::user(applicant_data), Message::system(system_message)]
}

/// Keyword the response parser should look for
///
/// Per-call override when present and non-empty, otherwise the template
/// default. Always the same string `build_prompt` substitutes.
pub fn get_ranking_keyword(config: &PromptConfig) -> &str {
    config
        .variables
        .ranking_keyword
        .as_deref()
        .filter(|keyword| !keyword.is_empty())
        .unwrap_or(config.template.ranking_keyword.as_str())
}

/// Replace `{additional_instructions}` with the trimmed text after a blank
/// line, or remove it when there is nothing to add
pub(crate) fn substitute_additional_instructions(message: &str, instructions: Option<&str>) -> String {
    let replacement = match non_blank(instructions) {
        Some(text) => format!("\n\n{text}"),
        None => String::new(),
    };
    message.replace(ADDITIONAL_INSTRUCTIONS_PLACEHOLDER, &replacement)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
