//! # mnemo-chat
//!
//! The chat orchestrator. A request runs through ordered stages (first
//! match wins), then classification, then one intent pipeline. Every
//! terminal branch produces a [`reply::Reply`] that the engine persists
//! and turns into a `ChatResponse`.

pub mod engine;
pub mod pipelines;
pub mod recall;
pub mod reply;
pub mod runtime;
pub mod stages;
pub mod templates;

pub use engine::{ChatEngine, ChatPorts, ChatSettings};
pub use runtime::MnemoRuntime;
