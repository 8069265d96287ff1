// Evaluation prompt system
//
// Template registries, the placeholder-substituting prompt builder, the
// multi-axis variant and the model catalog offered alongside them.

pub mod builder;
pub mod errors;
pub mod evaluation;
pub mod models;
pub mod multi_axis;
pub mod registry;
pub mod templates;

// Re-export main types
pub use builder::{build_prompt, get_ranking_keyword, Message, PromptConfig, Role};
pub use errors::{PromptError, PromptResult};
pub use evaluation::{build_evaluation_prompt, EvaluationPrompt, EvaluationPromptRequest, ScoreKeywords};
pub use multi_axis::{build_multi_axis_prompt, AxisTemplate, MultiAxisPromptConfig, MultiAxisTemplate};
pub use registry::{get_multi_axis_template, get_template, PromptLibrary, RegistryEntry, TemplateRegistry};
pub use templates::{PromptSettings, PromptTemplate, PromptVariables};
