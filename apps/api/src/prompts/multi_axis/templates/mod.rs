// Built-in multi-axis templates
//
// Both templates share the same framing text and differ only in their axes.

mod academic;
mod spar;

pub use academic::academic;
pub use spar::spar;

use super::base::{AxisTemplate, MultiAxisTemplate};

pub const ACADEMIC_ID: &str = "multi_axis_academic";
pub const SPAR_ID: &str = "multi_axis_spar";

const SYSTEM_INTRO: &str = r#"Evaluate the application above, based on the following criteria: {criteria_string}

You will evaluate the applicant across multiple dimensions, providing a separate rating for each. 
You should ignore general statements or facts about the world, and focus on what the applicant themselves has achieved.

IMPORTANT RATING CONSTRAINTS:
- Your rating for EACH AXIS MUST be an integer (whole number only)
- Your rating for EACH AXIS MUST be between 1 and 5 (inclusive)
- DO NOT use ratings above 5 or below 1
- If the rubric mentions different scale values, convert them to the 1-5 scale

First explain your reasoning thinking step by step. Then provide a separate rating for each axis:"#;

const SYSTEM_OUTRO: &str = r#"After evaluating all axes, provide an overall summary of the candidate's strengths and weaknesses.{additional_instructions}"#;

fn axis(name: &str, description: &str, ranking_keyword: &str, prompt_section: &str) -> AxisTemplate {
    AxisTemplate {
        name: name.to_string(),
        description: description.to_string(),
        ranking_keyword: ranking_keyword.to_string(),
        prompt_section: prompt_section.to_string(),
    }
}

/// Every built-in multi-axis template, in registry order
pub fn all() -> Vec<MultiAxisTemplate> {
    // academic is kept for callers that still ask for it by id
    vec![academic(), spar()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids() {
        let ids: Vec<String> = all().into_iter().map(|template| template.id).collect();

        assert_eq!(ids, vec![ACADEMIC_ID.to_string(), SPAR_ID.to_string()]);
    }

    #[test]
    fn spar_axes_and_keywords() {
        let keywords: Vec<String> = spar()
            .axis_ranking_keywords()
            .into_iter()
            .map(|axis| axis.ranking_keyword)
            .collect();

        assert_eq!(
            keywords,
            vec![
                "GENERAL_PROMISE_RATING",
                "ML_SKILLS_RATING",
                "SOFTWARE_ENGINEERING_RATING",
                "POLICY_EXPERIENCE_RATING",
                "AI_SAFETY_UNDERSTANDING_RATING",
                "PATH_TO_IMPACT_RATING",
                "RESEARCH_EXPERIENCE_RATING",
            ]
        );
    }

    #[test]
    fn academic_has_six_axes() {
        let template = academic();

        assert_eq!(template.axes.len(), 6);
        assert_eq!(template.axes[0].name, "General Premise");
    }

    #[test]
    fn every_section_asks_for_its_keyword() {
        for template in all() {
            for axis in &template.axes {
                assert!(axis.prompt_section.starts_with(&format!("## {}", axis.name)));
                assert!(axis
                    .prompt_section
                    .ends_with("state '{ranking_keyword} = ' followed by an integer from 1-5."));
            }
        }
    }

    #[test]
    fn spar_collapses_to_general_promise() {
        let single = spar().to_prompt_template().unwrap();

        assert_eq!(single.ranking_keyword, "GENERAL_PROMISE_RATING");
        assert!(single.system_message.contains("## General Promise"));
        assert!(single.system_message.contains("{criteria_string}"));
        assert!(single.system_message.ends_with("{additional_instructions}"));
    }
}
