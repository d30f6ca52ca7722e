//! Monologue rewrite of a finished script.

use goldoni_core::{GenerateRequest, Message, Role};
use goldoni_error::GoldoniResult;
use goldoni_interface::GoldoniDriver;
use goldoni_prompts::{PromptKey, PromptRegistry, Substitutions};
use tracing::debug;

const MONOLOGUE_MAX_TOKENS: u32 = 1_024;

/// Rewrite a finished sketch as a single spoken-word monologue.
///
/// One stateless model invocation: the script travels inside the prompt and
/// the response is the monologue text. Useful for feeding a script to a
/// single-voice text-to-speech pipeline.
///
/// # Errors
///
/// Returns a prompt error if template validation fails, or the driver's
/// error if the invocation fails.
pub async fn rewrite_as_monologue<D: GoldoniDriver + ?Sized>(
    driver: &D,
    script: &str,
    language: &str,
) -> GoldoniResult<String> {
    let registry = PromptRegistry::new()?;

    let system = registry.render(
        PromptKey::MonologueSystem,
        &Substitutions::new().with("language", language),
    );
    let prompt = registry.render(
        PromptKey::MonologueRewrite,
        &Substitutions::new()
            .with("script", script)
            .with("language", language),
    );

    let request = GenerateRequest {
        system: Some(system),
        messages: vec![Message::new(Role::User, prompt)],
        max_tokens: Some(MONOLOGUE_MAX_TOKENS),
        temperature: None,
        model: None,
    };

    let response = driver.generate(&request).await?;
    debug!(chars = response.text.len(), "Monologue rewrite complete");
    Ok(response.text.trim().to_string())
}
