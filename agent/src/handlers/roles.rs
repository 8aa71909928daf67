//! Roles command handler

use anyhow::Result;

use super::CommandContext;
use crate::orchestrator::blog_pipeline;

/// Handle the `roles` command - list stages in order with their roles
pub fn run_roles(ctx: &CommandContext) -> Result<()> {
    let registry = ctx.registry();
    let pipeline = blog_pipeline();

    println!("Pipeline: {} - {}\n", pipeline.name, pipeline.description);

    for (i, stage) in pipeline.stages.iter().enumerate() {
        println!("  {}. [{}]", i + 1, stage.name);
        println!("     Task: {}", stage.description);
        println!("     Expected: {}", stage.expected_output);

        match registry.get(&stage.role) {
            Some(role) => {
                println!("     Role: {} ({})", role.display_name, role.name);
                println!("     Goal: {}", role.goal);
                println!("     Backstory: {}", role.backstory);
            }
            None => println!("     Role: {} (not registered)", stage.role),
        }
        println!();
    }

    Ok(())
}
