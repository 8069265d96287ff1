// Single-axis prompt templates
//
// Templates carry a system message with literal placeholders that the
// builder fills in per call. The built-in library is fixed text; callers
// may still supply a custom template per request.

use serde::{Deserialize, Serialize};

use super::registry::RegistryEntry;

/// Placeholder for the evaluation rubric
pub const CRITERIA_PLACEHOLDER: &str = "{criteria_string}";
/// Placeholder for the effective ranking keyword
pub const RANKING_KEYWORD_PLACEHOLDER: &str = "{ranking_keyword}";
/// Placeholder for the optional structured-notes section
pub const NOTES_PLACEHOLDER: &str = "{notes_instructions}";
/// Placeholder for optional caller instructions
pub const ADDITIONAL_INSTRUCTIONS_PLACEHOLDER: &str = "{additional_instructions}";

/// Prompt template structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub system_message: String,
    /// Default keyword the model must prefix its final verdict line with
    pub ranking_keyword: String,
    /// Registry metadata only; the builder reads the per-call value instead
    #[serde(default)]
    pub additional_instructions: Option<String>,
}

impl RegistryEntry for PromptTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Per-call overrides substituted into a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptVariables {
    #[serde(default)]
    pub criteria_string: String,
    #[serde(default)]
    pub ranking_keyword: Option<String>,
    #[serde(default)]
    pub additional_instructions: Option<String>,
    #[serde(default)]
    pub notes_instructions: Option<String>,
}

impl PromptVariables {
    /// Variables carrying only a rubric
    pub fn new(criteria_string: impl Into<String>) -> Self {
        Self {
            criteria_string: criteria_string.into(),
            ..Self::default()
        }
    }

    pub fn with_ranking_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.ranking_keyword = Some(keyword.into());
        self
    }

    pub fn with_additional_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.additional_instructions = Some(instructions.into());
        self
    }

    pub fn with_notes_instructions(mut self, notes: impl Into<String>) -> Self {
        self.notes_instructions = Some(notes.into());
        self
    }
}

/// Settings a fresh installation starts from
///
/// Consumed by whatever stores user preferences; nothing in this crate
/// reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSettings {
    pub selected_template: String,
    pub custom_template: Option<PromptTemplate>,
    pub ranking_keyword: String,
    pub additional_instructions: String,
}

impl Default for PromptSettings {
    fn default() -> Self {
        let template = library::academic();
        Self {
            selected_template: template.id,
            custom_template: None,
            ranking_keyword: template.ranking_keyword,
            additional_instructions: String::new(),
        }
    }
}

/// Built-in template library
pub mod library {
    use super::PromptTemplate;

    pub const ACADEMIC_ID: &str = "academic";
    pub const DEFAULT_RANKING_KEYWORD: &str = "FINAL_RANKING";

    const ACADEMIC_SYSTEM_MESSAGE: &str = r#"Evaluate the application above, based on the following rubric: {criteria_string}

You should ignore general statements or facts about the world, and focus on what the applicant themselves has achieved. You do not need to structure your assessment similar to the answers the user has given.

=== MANDATORY OUTPUT FORMAT ===
Your response MUST end with this EXACT format on the last line:
{ranking_keyword} = [integer from 1-5]

This is REQUIRED. Do not add any text after this line.
================================

RATING CONSTRAINTS:
- Your rating MUST be an integer (whole number only)
- Your rating MUST be between 1 and 5 (inclusive)
- DO NOT use ratings above 5 or below 1
- If the rubric mentions different scale values, convert them to the 1-5 scale

Now, provide your evaluation:

1. First explain your reasoning thinking step by step.{notes_instructions}

2. MANDATORY FINAL LINE: End with exactly: {ranking_keyword} = [your integer score from 1-5]
   (Do not add anything after this line){additional_instructions}"#;

    /// Proven template for academic and course applications
    pub fn academic() -> PromptTemplate {
        PromptTemplate {
            id: ACADEMIC_ID.to_string(),
            name: "Academic Evaluation".to_string(),
            description: "Current proven template for academic/course applications".to_string(),
            system_message: ACADEMIC_SYSTEM_MESSAGE.to_string(),
            ranking_keyword: DEFAULT_RANKING_KEYWORD.to_string(),
            additional_instructions: None,
        }
    }

    /// Every built-in single-axis template, in registry order
    pub fn all() -> Vec<PromptTemplate> {
        vec![academic()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn academic_template_keeps_every_placeholder() {
        let template = library::academic();

        for placeholder in [
            CRITERIA_PLACEHOLDER,
            RANKING_KEYWORD_PLACEHOLDER,
            NOTES_PLACEHOLDER,
            ADDITIONAL_INSTRUCTIONS_PLACEHOLDER,
        ] {
            assert!(
                template.system_message.contains(placeholder),
                "missing {placeholder}"
            );
        }
        assert_eq!(template.id, "academic");
        assert_eq!(template.ranking_keyword, "FINAL_RANKING");
    }

    #[test]
    fn academic_placeholders_appear_in_order() {
        let message = library::academic().system_message;
        let criteria = message.find(CRITERIA_PLACEHOLDER).unwrap();
        let keyword = message.find(RANKING_KEYWORD_PLACEHOLDER).unwrap();
        let notes = message.find(NOTES_PLACEHOLDER).unwrap();
        let additional = message.find(ADDITIONAL_INSTRUCTIONS_PLACEHOLDER).unwrap();

        assert!(criteria < keyword);
        assert!(keyword < notes);
        assert!(notes < additional);
        assert!(message.ends_with("{additional_instructions}"));
    }

    #[test]
    fn default_settings_point_at_academic() {
        let settings = PromptSettings::default();

        assert_eq!(settings.selected_template, "academic");
        assert_eq!(settings.custom_template, None);
        assert_eq!(settings.ranking_keyword, "FINAL_RANKING");
        assert_eq!(settings.additional_instructions, "");
    }

    #[test]
    fn variables_deserialize_with_missing_fields() {
        let variables: PromptVariables = serde_json::from_str("{}").unwrap();

        assert_eq!(variables, PromptVariables::default());
        assert!(variables.criteria_string.is_empty());
    }

    #[test]
    fn custom_template_deserializes_without_additional_instructions() {
        let json = serde_json::json!({
            "id": "custom",
            "name": "Custom",
            "description": "Custom rubric",
            "system_message": "Rate: {criteria_string}",
            "ranking_keyword": "SCORE"
        });

        let template: PromptTemplate = serde_json::from_value(json).unwrap();
        assert_eq!(template.additional_instructions, None);
        assert_eq!(template.id(), "custom");
    }
}
