// Multi-axis evaluation
//
// One model call scores an applicant on several axes, each with its own
// ranking keyword.

pub mod base;
pub mod builder;
pub mod templates;

pub use base::{AxisKeyword, AxisTemplate, MultiAxisTemplate};
pub use builder::{build_multi_axis_prompt, MultiAxisPromptConfig};
