//! Content writer role and drafting stage text

pub const WRITER_GOAL: &str =
    "Write insightful and structured content based on planner's outline.";

pub const WRITER_BACKSTORY: &str =
    "You're a creative writer who turns ideas into compelling blog posts.";

pub const WRITE_DESCRIPTION: &str =
    "Write a blog post about {topic} based on the planner's outline with markdown formatting.";

pub const WRITE_EXPECTED_OUTPUT: &str =
    "A blog post in markdown format with intro, body, and conclusion.";
