//! # Carelink
//!
//! A command-line directory of hospitals and medical stores with AI-generated
//! provider summaries.
//!
//! ## Features
//!
//! - **Provider Summaries**: Free-text doctor bios condensed by an LLM into a validated `SummarizeResult`
//! - **Facility Directory**: Read-only listing of hospitals, stores and their doctors
//! - **Pluggable Backend**: Gemini via rstructor, or any `TextBackend` implementation

pub mod agent;
pub mod backend;
pub mod config;
pub mod directory;
pub mod prompt;
pub mod summary;

pub use agent::{ProviderSummarizer, SummarizeError};
pub use backend::{BackendError, GeminiBackend, TextBackend};
pub use config::Config;
pub use directory::{Directory, Doctor, Facility, FacilityKind};
pub use summary::{SummarizeRequest, SummarizeResult};
