//! Prompt registry for Goldoni playwriting agents.
//!
//! All agent system prompts and instruction templates live here, addressed
//! by a closed set of typed keys. Adding a new agent means adding keys and
//! templates; nothing else needs to change.
//!
//! Placeholder substitution is literal `{name}` replacement; unresolved
//! placeholders are left verbatim so partial configuration never halts
//! generation. Template/placeholder consistency is checked once, at
//! registry construction, before any model call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod key;
mod registry;
mod templates;

pub use key::PromptKey;
pub use registry::{PromptRegistry, Substitutions};
