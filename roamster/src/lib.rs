//! Roamster: a context-driven travel recommendation engine.
//!
//! A trip and a traveler profile go in; a deterministic, explained set of
//! clothing, food, experience, and photo recommendations plus advisory
//! notifications comes out. Storage, transport, and delivery are external
//! collaborators; the engine itself is pure computation over static rule
//! tables, with the clock and weather lookup injected.

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod recommend;

pub use error::{Result, RoamsterError};
pub use recommend::RecommendationEngine;
