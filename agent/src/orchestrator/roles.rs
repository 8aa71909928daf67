//! Role definitions and registry
//!
//! A role is a persona (goal + backstory) that a pipeline stage runs as.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::prompts;
use crate::config::RoleOverride;

/// Persona configuration for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for this role
    pub name: String,

    /// Display name used in prompts and logs
    #[serde(default)]
    pub display_name: String,

    /// What the role is trying to achieve (may contain {topic})
    pub goal: String,

    /// Persona description
    pub backstory: String,
}

impl Role {
    /// Create a new role
    pub fn new(name: impl Into<String>, goal: impl Into<String>, backstory: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Replace any fields the override sets
    fn apply(&mut self, o: &RoleOverride) {
        if let Some(display_name) = &o.display_name {
            self.display_name = display_name.clone();
        }
        if let Some(goal) = &o.goal {
            self.goal = goal.clone();
        }
        if let Some(backstory) = &o.backstory {
            self.backstory = backstory.clone();
        }
    }
}

/// Registry of available roles
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    roles: HashMap<String, Role>,
}

impl RoleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            roles: HashMap::new(),
        }
    }

    /// Create a registry with the planner, writer and editor roles
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(
            Role::new("planner", prompts::PLANNER_GOAL, prompts::PLANNER_BACKSTORY)
                .with_display_name("Content Planner"),
        );

        registry.register(
            Role::new("writer", prompts::WRITER_GOAL, prompts::WRITER_BACKSTORY)
                .with_display_name("Content Writer"),
        );

        registry.register(
            Role::new("editor", prompts::EDITOR_GOAL, prompts::EDITOR_BACKSTORY)
                .with_display_name("Editor"),
        );

        registry
    }

    /// Register a role, replacing any role with the same name
    pub fn register(&mut self, role: Role) {
        self.roles.insert(role.name.clone(), role);
    }

    /// Apply config overrides to existing roles.
    ///
    /// Overrides naming an unknown role are skipped with a warning.
    pub fn apply_overrides(&mut self, overrides: &[RoleOverride]) {
        for o in overrides {
            match self.roles.get_mut(&o.name) {
                Some(role) => role.apply(o),
                None => tracing::warn!("Ignoring override for unknown role '{}'", o.name),
            }
        }
    }

    /// Get a role by name
    pub fn get(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    /// Check if a role exists
    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    /// Number of registered roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
