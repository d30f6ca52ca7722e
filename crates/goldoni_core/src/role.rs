//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Message-level role in a model conversation.
///
/// This is the chat protocol role, not the agent identity; see
/// [`crate::Speaker`] for the latter.
///
/// # Examples
///
/// ```
/// use goldoni_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry instructions into the model
    User,
    /// Assistant messages are model output
    Assistant,
}
