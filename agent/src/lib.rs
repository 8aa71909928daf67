//! Plan, write and edit a blog post with three cooperating agents
//! backed by a hosted text-generation model.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod llm;
pub mod orchestrator;
pub mod output;
pub mod service;

#[cfg(feature = "web")]
pub mod web;
