//! Summarization pipeline for listener behavior profiles.
//!
//! This crate provides:
//! - DayPart bucketing and the per-listener profile fold
//! - ProfileEngine for summarizing all listeners in parallel
//! - AggregateProfile for the library-wide mean profile
//!
//! ## Architecture
//! The pipeline processes a grouped `EventLog` in two stages:
//! 1. ProfileEngine folds each listener's events into a UserProfile
//!    (independent per listener, runs on Rayon)
//! 2. AggregateProfile takes the element-wise mean over all profiles
//!    (full barrier: needs every profile first)
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{AggregateProfile, ProfileEngine};
//!
//! let engine = ProfileEngine::new();
//! let profiles = engine.summarize_all(&log)?;
//!
//! let just_profiles: Vec<_> = profiles.iter().map(|(_, p)| *p).collect();
//! let aggregate = AggregateProfile::from_profiles(&just_profiles)?;
//! ```

pub mod error;
pub mod profile;
pub mod aggregate;

// Re-export main types
pub use error::{ProfileError, Result};
pub use profile::{DayPart, ProfileEngine, UserProfile, summarize_listener};
pub use aggregate::AggregateProfile;
