//! Role personas and stage instructions
//!
//! Each role has a goal and a backstory; each stage has a description and
//! the criteria its answer must meet. `render_stage_prompt` stitches them
//! together into the text sent to the model.

mod editor;
mod planner;
mod writer;

pub use editor::{EDITOR_BACKSTORY, EDITOR_GOAL, EDIT_DESCRIPTION, EDIT_EXPECTED_OUTPUT};
pub use planner::{PLANNER_BACKSTORY, PLANNER_GOAL, PLAN_DESCRIPTION, PLAN_EXPECTED_OUTPUT};
pub use writer::{WRITER_BACKSTORY, WRITER_GOAL, WRITE_DESCRIPTION, WRITE_EXPECTED_OUTPUT};

use super::pipeline::Stage;
use super::roles::Role;

/// Build the instructions for one stage.
///
/// Placeholders are left in place for the caller to substitute.
pub fn render_stage_prompt(role: &Role, stage: &Stage) -> String {
    format!(
        "You are {}. {}\nYour personal goal is: {}\n\nCurrent Task: {}\n\n\
         This is the expected criteria for your final answer: {}\n\
         you MUST return the actual complete content as the final answer, not a summary.",
        role.display_name, role.backstory, role.goal, stage.description, stage.expected_output,
    )
}

/// Append the previous stage's output as working context
pub fn append_context(mut prompt: String, context: &str) -> String {
    prompt.push_str("\n\nThis is the context you're working with:\n");
    prompt.push_str(context);
    prompt
}
