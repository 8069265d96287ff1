use serde::{Deserialize, Serialize};

use crate::prompts::errors::{PromptError, PromptResult};
use crate::prompts::registry::RegistryEntry;
use crate::prompts::templates::PromptTemplate;

/// One evaluation axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTemplate {
    pub name: String,
    pub description: String,
    pub ranking_keyword: String,
    /// Section text; may contain `{ranking_keyword}`
    pub prompt_section: String,
}

/// Template scoring an applicant on several axes at once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiAxisTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub system_intro: String,
    pub system_outro: String,
    pub axes: Vec<AxisTemplate>,
}

/// Axis name paired with the keyword its score is reported under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisKeyword {
    pub name: String,
    pub ranking_keyword: String,
}

impl MultiAxisTemplate {
    /// Collapse to a single-axis template built from the first axis
    ///
    /// # Errors
    /// Returns `PromptError::NoAxes` if the template has no axes.
    pub fn to_prompt_template(&self) -> PromptResult<PromptTemplate> {
        let first = self
            .axes
            .first()
            .ok_or_else(|| PromptError::NoAxes(self.id.clone()))?;

        Ok(PromptTemplate {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            system_message: format!(
                "{}\n\n{}\n\n{}",
                self.system_intro, first.prompt_section, self.system_outro
            ),
            ranking_keyword: first.ranking_keyword.clone(),
            additional_instructions: None,
        })
    }

    /// Keyword per axis, in axis order
    pub fn axis_ranking_keywords(&self) -> Vec<AxisKeyword> {
        self.axes
            .iter()
            .map(|axis| AxisKeyword {
                name: axis.name.clone(),
                ranking_keyword: axis.ranking_keyword.clone(),
            })
            .collect()
    }
}

impl RegistryEntry for MultiAxisTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}
