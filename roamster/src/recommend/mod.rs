//! The four domain recommenders, the notification rules, and the
//! orchestrator that composes them over a single shared context.

pub mod clothing;
mod engine;
pub mod experience;
pub mod food;
mod notify;
pub mod photo;
mod policy;

pub use engine::RecommendationEngine;
pub use notify::derive_notifications;
pub use policy::GroupPolicy;
