//! Prompt lookup and substitution.

use crate::PromptKey;
use crate::templates::{Template, template};
use goldoni_error::{PromptError, PromptErrorKind};
use regex::Regex;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::debug;

/// Placeholder values for template rendering.
///
/// Substitution is literal `{name}` replacement. Values set here but absent
/// from the template are ignored; placeholders in the template with no value
/// here are left verbatim.
///
/// # Examples
///
/// ```
/// use goldoni_prompts::Substitutions;
///
/// let subs = Substitutions::new()
///     .with("language", "English")
///     .with("theme", "a wizard afraid of magic");
/// assert_eq!(subs.get("language"), Some("English"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions(BTreeMap<String, String>);

impl Substitutions {
    /// Create an empty substitution set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a placeholder value, consuming and returning the set.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Look up a placeholder value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate over (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Registry of all agent prompts, validated at construction.
///
/// Construction scans every template for `{name}` placeholders and rejects
/// any that its key did not declare, so a typo in a template surfaces
/// before the first model call rather than mid-session.
///
/// Lookup is pure: the same key and substitutions always produce the same
/// text.
///
/// # Examples
///
/// ```
/// use goldoni_prompts::{PromptKey, PromptRegistry, Substitutions};
///
/// let registry = PromptRegistry::new().unwrap();
/// let prompt = registry.render(
///     PromptKey::SketchGenerate,
///     &Substitutions::new()
///         .with("theme", "a haunted photocopier")
///         .with("language", "English"),
/// );
/// assert!(prompt.contains("a haunted photocopier"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptRegistry {
    placeholder_re: Regex,
}

impl PromptRegistry {
    /// Build the registry, validating every template.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the placeholder scanning pattern fails
    /// to compile, `UndeclaredPlaceholder` if any template text references
    /// a placeholder outside its declared set, or `EmptyTemplate` if a
    /// template is blank.
    pub fn new() -> Result<Self, PromptError> {
        let placeholder_re = Regex::new(r"\{([a-z_]+)\}")
            .map_err(|e| PromptError::new(PromptErrorKind::InvalidPattern(e.to_string())))?;

        for key in PromptKey::iter() {
            let Template { text, placeholders } = template(key);
            if text.trim().is_empty() {
                return Err(PromptError::new(PromptErrorKind::EmptyTemplate(
                    key.to_string(),
                )));
            }
            for capture in placeholder_re.captures_iter(text) {
                let name = &capture[1];
                if !placeholders.contains(&name) {
                    return Err(PromptError::new(PromptErrorKind::UndeclaredPlaceholder {
                        key: key.to_string(),
                        placeholder: name.to_string(),
                    }));
                }
            }
        }

        debug!(
            prompt_count = PromptKey::iter().count(),
            "Prompt registry validated"
        );
        Ok(Self { placeholder_re })
    }

    /// Get the raw (unsubstituted) template text for a key.
    pub fn get(&self, key: PromptKey) -> &'static str {
        template(key).text
    }

    /// The placeholder names a key's template declares.
    pub fn placeholders(&self, key: PromptKey) -> &'static [&'static str] {
        template(key).placeholders
    }

    /// Render a template, substituting `{name}` placeholders literally.
    ///
    /// Unresolved placeholders are left verbatim: partial configuration is
    /// a permitted state, not an error.
    pub fn render(&self, key: PromptKey, substitutions: &Substitutions) -> String {
        let mut text = template(key).text.to_string();
        for (name, value) in substitutions.iter() {
            let placeholder = format!("{{{}}}", name);
            text = text.replace(&placeholder, value);
        }
        text
    }

    /// All `{name}` placeholders appearing in a rendered or raw text.
    ///
    /// Mostly useful for diagnostics: callers can report which
    /// placeholders a rendering left unresolved.
    pub fn unresolved<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.placeholder_re
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_validates_all_templates() {
        let registry = PromptRegistry::new().unwrap();
        for key in PromptKey::iter() {
            assert!(!registry.get(key).is_empty());
        }
    }

    #[test]
    fn render_substitutes_declared_placeholders() {
        let registry = PromptRegistry::new().unwrap();
        let subs = Substitutions::new()
            .with("genre", "Comedy")
            .with("theme", "a bakery run by robots")
            .with("tone", "Satirical")
            .with("language", "English");
        let prompt = registry.render(PromptKey::WriterOpening, &subs);
        assert!(prompt.contains("**Genre**: Comedy"));
        assert!(prompt.contains("a bakery run by robots"));
        assert!(!prompt.contains("{genre}"));
    }

    #[test]
    fn unresolved_placeholders_are_left_verbatim() {
        let registry = PromptRegistry::new().unwrap();
        let subs = Substitutions::new().with("genre", "Drama");
        let prompt = registry.render(PromptKey::WriterOpening, &subs);
        assert!(prompt.contains("{theme}"));
        assert!(prompt.contains("{language}"));
        assert_eq!(registry.unresolved(&prompt).len(), 4);
    }

    #[test]
    fn render_is_idempotent() {
        let registry = PromptRegistry::new().unwrap();
        let subs = Substitutions::new()
            .with("script", "TITLE\nA: hello")
            .with("critique", "- punchline fizzles")
            .with("language", "English");
        let first = registry.render(PromptKey::SketchRevise, &subs);
        let second = registry.render(PromptKey::SketchRevise, &subs);
        assert_eq!(first, second);
    }

    #[test]
    fn system_prompts_have_no_placeholders_except_declared() {
        let registry = PromptRegistry::new().unwrap();
        assert!(registry.placeholders(PromptKey::WriterSystem).is_empty());
        assert_eq!(
            registry.placeholders(PromptKey::SketchSystem),
            &["language"]
        );
    }
}
