use super::{axis, ACADEMIC_ID, SYSTEM_INTRO, SYSTEM_OUTRO};
use crate::prompts::multi_axis::base::MultiAxisTemplate;

const GENERAL_PREMISE_SECTION: &str = r#"## General Premise
Evaluate the overall quality of the application and how well the candidate aligns with our goals.
Consider their motivation, alignment, and overall potential.
Provide your analysis and then state '{ranking_keyword} = ' followed by an integer from 1-5."#;

const ML_SKILLS_SECTION: &str = r#"## ML Skills
Assess the candidate's machine learning skills, technical background, and relevant experience.
Consider their projects, academic background, and demonstrated technical abilities.
Provide your analysis and then state '{ranking_keyword} = ' followed by an integer from 1-5."#;

const POLICY_EXPERIENCE_SECTION: &str = r#"## Policy Experience
Evaluate the candidate's experience in AI policy, governance, or regulatory matters.
Consider their work in policy formulation, understanding of regulatory frameworks, and engagement with policy institutions.
Provide your analysis and then state '{ranking_keyword} = ' followed by an integer from 1-5."#;

const AI_SAFETY_SECTION: &str = r#"## Understanding of AI Safety
Assess the candidate's understanding of AI safety concepts, alignment, and technical safety considerations.
Consider their demonstrated knowledge, relevant work, and their approach to safety challenges.
Provide your analysis and then state '{ranking_keyword} = ' followed by an integer from 1-5."#;

const PATH_TO_IMPACT_SECTION: &str = r#"## Path to Impact
Evaluate the clarity and feasibility of the candidate's planned path to making a positive impact in the field.
Consider the specificity of their goals, the practicality of their approach, and the potential significance of their impact.
Provide your analysis and then state '{ranking_keyword} = ' followed by an integer from 1-5."#;

const RESEARCH_EXPERIENCE_SECTION: &str = r#"## Research Experience
Assess the candidate's research experience, whether in academia or industry.
Consider the quality and relevance of their research, publications, and demonstrated research abilities.
Provide your analysis and then state '{ranking_keyword} = ' followed by an integer from 1-5."#;

/// Academic and research potential across six axes; superseded by SPAR
pub fn academic() -> MultiAxisTemplate {
    MultiAxisTemplate {
        id: ACADEMIC_ID.to_string(),
        name: "Multi-Axis Academic Evaluation".to_string(),
        description: "Comprehensive evaluation across multiple axes of academic and research potential".to_string(),
        system_intro: SYSTEM_INTRO.to_string(),
        system_outro: SYSTEM_OUTRO.to_string(),
        axes: vec![
            axis(
                "General Premise",
                "Overall quality and fit of the application",
                "GENERAL_PREMISE_RATING",
                GENERAL_PREMISE_SECTION,
            ),
            axis(
                "ML Skills",
                "Technical machine learning skills and experience",
                "ML_SKILLS_RATING",
                ML_SKILLS_SECTION,
            ),
            axis(
                "Policy Experience",
                "Experience in AI policy or governance",
                "POLICY_EXPERIENCE_RATING",
                POLICY_EXPERIENCE_SECTION,
            ),
            axis(
                "Understanding of AI Safety",
                "Knowledge and understanding of AI safety concepts",
                "AI_SAFETY_RATING",
                AI_SAFETY_SECTION,
            ),
            axis(
                "Path to Impact",
                "Clarity and feasibility of their planned impact",
                "PATH_TO_IMPACT_RATING",
                PATH_TO_IMPACT_SECTION,
            ),
            axis(
                "Research Experience",
                "Academic or industry research experience",
                "RESEARCH_EXPERIENCE_RATING",
                RESEARCH_EXPERIENCE_SECTION,
            ),
        ],
    }
}
