//! Playwright/Critic sketch orchestrator.

use crate::config::SketchConfig;
use crate::events::{EventSink, SessionEvent};
use crate::streaming::{
    ContinuationParams, invocation_error, stream_turn, stream_with_continuation,
};
use goldoni_core::{GenerateRequest, Message, Role, Speaker, Turn};
use goldoni_error::{GoldoniResult, SessionError, SessionErrorKind};
use goldoni_interface::{FinishReason, Streaming};
use goldoni_prompts::{PromptKey, PromptRegistry, Substitutions};
use tracing::{debug, instrument};

/// A bounded draft/critique/revise loop for two-minute comedy sketches.
///
/// The Playwright produces an initial draft, then the Critic and the
/// Playwright alternate for exactly the configured number of critique
/// iterations. Zero iterations is valid: the initial draft is the final
/// artifact. The Playwright keeps a private conversation history across
/// iterations; the Critic is stateless and sees only the current draft,
/// quoted inside its instruction.
pub struct SketchSession<D> {
    driver: D,
    registry: PromptRegistry,
    config: SketchConfig,
    transcript: Vec<Turn>,
    playwright_history: Vec<Message>,
    final_script: Option<String>,
}

impl<D: Streaming> SketchSession<D> {
    /// Create a session, validating the configuration and prompt registry.
    ///
    /// # Errors
    ///
    /// Returns `MalformedConfiguration` if the critique-round cap is out of
    /// bounds, or a prompt error if a template fails validation.
    pub fn new(driver: D, config: SketchConfig) -> GoldoniResult<Self> {
        config.validate()?;
        let registry = PromptRegistry::new()?;
        Ok(Self {
            driver,
            registry,
            config,
            transcript: Vec::new(),
            playwright_history: Vec::new(),
            final_script: None,
        })
    }

    /// Run the sketch loop to completion, returning the final script.
    ///
    /// Produces exactly `1 + 2 * critique_rounds` turns: the draft, then a
    /// critique and a revision per iteration.
    #[instrument(skip_all, fields(critique_rounds = %self.config.critique_rounds()))]
    pub async fn run(&mut self, events: &EventSink) -> GoldoniResult<String> {
        let iterations = *self.config.critique_rounds();
        let mut script = self.draft(iterations, events).await?;

        for iteration in 1..=iterations {
            events.send(SessionEvent::RoundStarted {
                round: iteration,
                total: iterations,
            });
            let critique = self.critique(iteration, &script, events).await?;
            script = self
                .revise(iteration, iterations, &script, &critique, events)
                .await?;
        }

        self.final_script = Some(script.clone());
        events.send(SessionEvent::Completed {
            script: script.clone(),
        });
        debug!(turns = self.transcript.len(), "Sketch complete");
        Ok(script)
    }

    /// Produce the initial draft, continuing past truncation if needed.
    async fn draft(&mut self, iterations: u32, events: &EventSink) -> GoldoniResult<String> {
        let system = self.registry.render(
            PromptKey::SketchSystem,
            &Substitutions::new().with("language", self.config.language()),
        );
        let instruction = self.registry.render(
            PromptKey::SketchGenerate,
            &Substitutions::new()
                .with("theme", self.config.theme())
                .with("language", self.config.language()),
        );
        let nudge = self.registry.get(PromptKey::ContinuationNudge);

        let params = ContinuationParams {
            system: &system,
            model: self.config.model().as_deref(),
            max_tokens: *self.config.max_tokens(),
            temperature: None,
            max_continuations: *self.config.max_continuations(),
        };

        let text =
            stream_with_continuation(&self.driver, &params, &[], &instruction, nudge, Speaker::Playwright, events)
                .await
                .map_err(|e| invocation_error(Speaker::Playwright, 1, e))?;

        if text.trim().is_empty() {
            return Err(SessionError::new(SessionErrorKind::EmptyDraft).into());
        }

        self.playwright_history
            .push(Message::new(Role::User, instruction));
        self.playwright_history
            .push(Message::new(Role::Assistant, text.clone()));

        // The draft is the final artifact when no critique iterations run.
        self.record(
            Turn::new(Speaker::Playwright, 1, text.clone(), iterations == 0),
            events,
        );
        Ok(text)
    }

    /// One Critic turn: short bullet-note critique of the current script.
    async fn critique(
        &mut self,
        iteration: u32,
        script: &str,
        events: &EventSink,
    ) -> GoldoniResult<String> {
        let system = self.registry.render(
            PromptKey::CriticSystem,
            &Substitutions::new().with("language", self.config.language()),
        );
        let prompt = self.registry.render(
            PromptKey::CriticRequest,
            &Substitutions::new().with("script", script),
        );

        let request = GenerateRequest {
            system: Some(system),
            messages: vec![Message::new(Role::User, prompt)],
            max_tokens: Some(*self.config.critic_max_tokens()),
            temperature: None,
            model: self.config.model().clone(),
        };

        let outcome = stream_turn(&self.driver, &request, Speaker::Critic, events)
            .await
            .map_err(|e| invocation_error(Speaker::Critic, iteration, e))?;

        self.record(
            Turn::new(Speaker::Critic, iteration, outcome.text.clone(), false),
            events,
        );
        Ok(outcome.text)
    }

    /// One Playwright revision addressing the Critic's notes.
    async fn revise(
        &mut self,
        iteration: u32,
        iterations: u32,
        script: &str,
        critique: &str,
        events: &EventSink,
    ) -> GoldoniResult<String> {
        let system = self.registry.render(
            PromptKey::SketchSystem,
            &Substitutions::new().with("language", self.config.language()),
        );
        let prompt = self.registry.render(
            PromptKey::SketchRevise,
            &Substitutions::new()
                .with("critique", critique)
                .with("script", script)
                .with("language", self.config.language()),
        );

        self.playwright_history
            .push(Message::new(Role::User, prompt));
        let request = GenerateRequest {
            system: Some(system),
            messages: self.playwright_history.clone(),
            max_tokens: Some(*self.config.max_tokens()),
            temperature: None,
            model: self.config.model().clone(),
        };

        let outcome = stream_turn(&self.driver, &request, Speaker::Playwright, events)
            .await
            .map_err(|e| invocation_error(Speaker::Playwright, iteration, e))?;

        self.playwright_history
            .push(Message::new(Role::Assistant, outcome.text.clone()));

        if outcome.finish == Some(FinishReason::Length) {
            events.send(SessionEvent::Warning {
                message: format!("Revision in iteration {iteration} hit the token ceiling"),
            });
        }

        self.record(
            Turn::new(
                Speaker::Playwright,
                iteration,
                outcome.text.clone(),
                iteration == iterations,
            ),
            events,
        );
        Ok(outcome.text)
    }

    fn record(&mut self, turn: Turn, events: &EventSink) {
        self.transcript.push(turn.clone());
        events.send(SessionEvent::TurnCompleted(turn));
    }

    /// Every completed turn, in order. Survives a mid-session failure.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// The finished script, once the session has run to completion.
    pub fn final_script(&self) -> Option<&str> {
        self.final_script.as_deref()
    }

    /// The session's configuration.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// The Playwright's private conversation history.
    pub fn playwright_history(&self) -> &[Message] {
        &self.playwright_history
    }
}
