//! Agent identities for playwriting sessions.

use serde::{Deserialize, Serialize};

/// Identity of an agent participating in a session.
///
/// The set is closed: collaboration sessions pair [`Speaker::Writer`] with
/// [`Speaker::Director`], critique loops pair [`Speaker::Playwright`] with
/// [`Speaker::Critic`].
///
/// # Examples
///
/// ```
/// use goldoni_core::Speaker;
///
/// assert_eq!(format!("{}", Speaker::Writer), "Writer");
/// assert_ne!(Speaker::Playwright, Speaker::Critic);
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
    strum::EnumIter,
)]
pub enum Speaker {
    /// Drafts story, characters, scenes, and dialogue
    Writer,
    /// Critiques drafts and synthesizes the final script
    Director,
    /// Produces and revises a one-act sketch
    Playwright,
    /// Issues bullet-style critique notes on a sketch draft
    Critic,
}
