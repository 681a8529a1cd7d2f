//! MCQ generation and Word export.
//!
//! Flow: handler validates → build_mcq_prompt → one Gemini call →
//! normalize to text → classify via the "Error:" substring contract.
//! Export treats that text as opaque lines and never parses it.

pub mod export;
pub mod filename;
pub mod generator;
pub mod handlers;
pub mod prompts;
