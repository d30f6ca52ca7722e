//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single message in an agent's conversation history.
///
/// Content is opaque text; the orchestration core never inspects it.
///
/// # Examples
///
/// ```
/// use goldoni_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Hello!");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a message from a role and text content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let message = MessageBuilder::default()
            .role(Role::Assistant)
            .content("ACT I")
            .build()
            .unwrap();
        assert_eq!(message, Message::new(Role::Assistant, "ACT I"));
    }

    #[test]
    fn builder_requires_role() {
        let result = MessageBuilder::default().content("text").build();
        assert!(result.is_err());
    }
}
