//! Writer/Director collaboration orchestrator.

use crate::config::CollaborationConfig;
use crate::events::{EventSink, SessionEvent};
use crate::streaming::{
    ContinuationParams, invocation_error, stream_turn, stream_with_continuation,
};
use goldoni_core::{GenerateRequest, Message, Role, Speaker, Turn};
use goldoni_error::GoldoniResult;
use goldoni_interface::{FinishReason, Streaming};
use goldoni_prompts::{PromptKey, PromptRegistry, Substitutions};
use tracing::{debug, instrument};

/// A bounded Writer/Director collaboration.
///
/// The Writer and the Director alternate for exactly the configured number
/// of rounds. Each agent keeps a private conversation history; drafts and
/// feedback cross between them only as quoted prompt content, so neither
/// agent ever sees the other's system prompt or raw history. The Director's
/// final-round response is the finished play script.
///
/// Any invocation failure aborts the session without retry. Turns recorded
/// before the failure stay available through [`transcript`], so a partially
/// completed session is still inspectable.
///
/// [`transcript`]: CollaborationSession::transcript
pub struct CollaborationSession<D> {
    driver: D,
    registry: PromptRegistry,
    config: CollaborationConfig,
    transcript: Vec<Turn>,
    writer_history: Vec<Message>,
    director_history: Vec<Message>,
    rounds_completed: u32,
    final_script: Option<String>,
}

impl<D: Streaming> CollaborationSession<D> {
    /// Create a session, validating the configuration and prompt registry.
    ///
    /// # Errors
    ///
    /// Returns `MalformedConfiguration` if the round cap is out of bounds,
    /// or a prompt error if a template fails validation.
    pub fn new(driver: D, config: CollaborationConfig) -> GoldoniResult<Self> {
        config.validate()?;
        let registry = PromptRegistry::new()?;
        Ok(Self {
            driver,
            registry,
            config,
            transcript: Vec::new(),
            writer_history: Vec::new(),
            director_history: Vec::new(),
            rounds_completed: 0,
            final_script: None,
        })
    }

    /// Run the collaboration to completion, returning the final script.
    ///
    /// Exactly `rounds` Writer turns and `rounds` Director turns execute,
    /// in strict alternation. Progress events flow through `events`; the
    /// caller may drop the receiving half at any time without affecting
    /// the session.
    #[instrument(skip_all, fields(rounds = %self.config.rounds()))]
    pub async fn run(&mut self, events: &EventSink) -> GoldoniResult<String> {
        let total = *self.config.rounds();
        let mut script = String::new();

        for round in 1..=total {
            events.send(SessionEvent::RoundStarted { round, total });

            let draft = self.writer_turn(round, total, events).await?;

            if round < total {
                let feedback = self.director_critique(round, total, &draft, events).await?;
                self.writer_history.push(Message::new(
                    Role::User,
                    format!("[Director's feedback]\n{feedback}"),
                ));
            } else {
                script = self.director_final(round, &draft, events).await?;
            }

            self.rounds_completed = round;
        }

        self.final_script = Some(script.clone());
        events.send(SessionEvent::Completed {
            script: script.clone(),
        });
        debug!(turns = self.transcript.len(), "Collaboration complete");
        Ok(script)
    }

    /// One Writer turn: opening pitch in round 1, revision thereafter.
    async fn writer_turn(
        &mut self,
        round: u32,
        total: u32,
        events: &EventSink,
    ) -> GoldoniResult<String> {
        let instruction = if round == 1 {
            self.registry.render(
                PromptKey::WriterOpening,
                &Substitutions::new()
                    .with("genre", self.config.genre())
                    .with("theme", self.config.theme())
                    .with("tone", self.config.tone())
                    .with("language", self.config.language()),
            )
        } else {
            self.registry.render(
                PromptKey::WriterRevision,
                &Substitutions::new()
                    .with("round", round.to_string())
                    .with("total", total.to_string())
                    .with("language", self.config.language()),
            )
        };

        self.writer_history.push(Message::new(Role::User, instruction));
        let request = self.request(PromptKey::WriterSystem, &self.writer_history);

        let outcome = stream_turn(&self.driver, &request, Speaker::Writer, events)
            .await
            .map_err(|e| invocation_error(Speaker::Writer, round, e))?;

        if outcome.finish == Some(FinishReason::Length) {
            events.send(SessionEvent::Warning {
                message: format!("Writer draft in round {round} hit the token ceiling"),
            });
        }

        self.writer_history
            .push(Message::new(Role::Assistant, outcome.text.clone()));
        self.record(Turn::new(Speaker::Writer, round, outcome.text.clone(), false), events);
        Ok(outcome.text)
    }

    /// Director critique for a non-final round.
    async fn director_critique(
        &mut self,
        round: u32,
        total: u32,
        draft: &str,
        events: &EventSink,
    ) -> GoldoniResult<String> {
        let prompt = self.registry.render(
            PromptKey::DirectorCritique,
            &Substitutions::new()
                .with("round", round.to_string())
                .with("total", total.to_string())
                .with("draft", draft)
                .with("language", self.config.language()),
        );

        self.director_history.push(Message::new(Role::User, prompt));
        let request = self.request(PromptKey::DirectorSystem, &self.director_history);

        let outcome = stream_turn(&self.driver, &request, Speaker::Director, events)
            .await
            .map_err(|e| invocation_error(Speaker::Director, round, e))?;

        if outcome.finish == Some(FinishReason::Length) {
            events.send(SessionEvent::Warning {
                message: format!("Director critique in round {round} hit the token ceiling"),
            });
        }

        self.director_history
            .push(Message::new(Role::Assistant, outcome.text.clone()));
        self.record(
            Turn::new(Speaker::Director, round, outcome.text.clone(), false),
            events,
        );
        Ok(outcome.text)
    }

    /// Final-round Director turn: synthesise the complete script, with
    /// bounded continuation if the model stops at the token ceiling.
    async fn director_final(
        &mut self,
        round: u32,
        draft: &str,
        events: &EventSink,
    ) -> GoldoniResult<String> {
        let prompt = self.registry.render(
            PromptKey::DirectorFinal,
            &Substitutions::new()
                .with("draft", draft)
                .with("language", self.config.language()),
        );
        let nudge = self.registry.get(PromptKey::ContinuationNudge);

        let params = ContinuationParams {
            system: self.registry.get(PromptKey::DirectorSystem),
            model: self.config.model().as_deref(),
            max_tokens: *self.config.max_tokens(),
            temperature: *self.config.temperature(),
            max_continuations: *self.config.max_continuations(),
        };

        let script = stream_with_continuation(
            &self.driver,
            &params,
            &self.director_history,
            &prompt,
            nudge,
            Speaker::Director,
            events,
        )
        .await
        .map_err(|e| invocation_error(Speaker::Director, round, e))?;

        self.director_history.push(Message::new(Role::User, prompt));
        self.director_history
            .push(Message::new(Role::Assistant, script.clone()));
        self.record(Turn::new(Speaker::Director, round, script.clone(), true), events);
        Ok(script)
    }

    fn request(&self, system: PromptKey, history: &[Message]) -> GenerateRequest {
        GenerateRequest {
            system: Some(self.registry.get(system).to_string()),
            messages: history.to_vec(),
            max_tokens: Some(*self.config.max_tokens()),
            temperature: *self.config.temperature(),
            model: self.config.model().clone(),
        }
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

    /// How many full rounds have completed.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// The session's configuration.
    pub fn config(&self) -> &CollaborationConfig {
        &self.config
    }

    /// The Writer's private conversation history.
    pub fn writer_history(&self) -> &[Message] {
        &self.writer_history
    }

    /// The Director's private conversation history.
    pub fn director_history(&self) -> &[Message] {
        &self.director_history
    }
}
