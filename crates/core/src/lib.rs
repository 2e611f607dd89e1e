//! Domain logic for the VideoFuel content wizard.
//!
//! Everything in this crate is synchronous and free of I/O: prompt
//! construction, parsing of provider output, SEO scoring and the step
//! wizard state machine. The API crate wires these to the LLM client and
//! the database.

pub mod content;
pub mod error;
pub mod language;
pub mod models;
pub mod pagination;
pub mod parsing;
pub mod prompts;
pub mod seo;
pub mod types;
pub mod wizard;
