//! Content planner role and planning stage text

pub const PLANNER_GOAL: &str = "Plan engaging and factually accurate content on {topic}";

pub const PLANNER_BACKSTORY: &str =
    "You're a strategic thinker who outlines the blog based on trends and SEO.";

pub const PLAN_DESCRIPTION: &str = "Create a detailed content outline for {topic} including intro, key points, audience, and SEO keywords.";

pub const PLAN_EXPECTED_OUTPUT: &str =
    "A structured outline for a blog post with headings and keywords.";
