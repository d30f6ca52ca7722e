//! Integration tests for the sketch loop and the monologue rewrite.

mod common;

use common::{Scripted, ScriptedDriver};
use goldoni_core::{Role, Speaker};
use goldoni_error::{GoldoniErrorKind, SessionErrorKind};
use goldoni_session::{
    EventSink, SessionEvent, SketchConfig, SketchSession, rewrite_as_monologue,
};
use std::sync::Arc;

fn config(critique_rounds: u32) -> SketchConfig {
    SketchConfig::builder()
        .theme("a haunted photocopier")
        .critique_rounds(critique_rounds)
        .build()
        .unwrap()
}

#[tokio::test]
async fn zero_iterations_returns_the_draft() {
    let driver = ScriptedDriver::new(vec![Scripted::reply("DRAFT")]);
    let mut session = SketchSession::new(driver, config(0)).unwrap();

    let script = session.run(&EventSink::discard()).await.unwrap();

    assert_eq!(script, "DRAFT");
    assert_eq!(session.transcript().len(), 1);
    let turn = &session.transcript()[0];
    assert_eq!(turn.speaker, Speaker::Playwright);
    assert_eq!(turn.round, 1);
    assert!(turn.is_final);
}

#[tokio::test]
async fn two_iterations_return_the_last_revision() {
    let driver = ScriptedDriver::new(vec![
        Scripted::reply("DRAFT"),
        Scripted::reply("NOTES 1"),
        Scripted::reply("REV 1"),
        Scripted::reply("NOTES 2"),
        Scripted::reply("REV 2"),
    ]);
    let mut session = SketchSession::new(driver, config(2)).unwrap();

    let script = session.run(&EventSink::discard()).await.unwrap();

    assert_eq!(script, "REV 2");
    let transcript = session.transcript();
    assert_eq!(transcript.len(), 5);
    let speakers: Vec<Speaker> = transcript.iter().map(|t| t.speaker).collect();
    assert_eq!(
        speakers,
        vec![
            Speaker::Playwright,
            Speaker::Critic,
            Speaker::Playwright,
            Speaker::Critic,
            Speaker::Playwright
        ]
    );
    let rounds: Vec<u32> = transcript.iter().map(|t| t.round).collect();
    assert_eq!(rounds, vec![1, 1, 1, 2, 2]);
    assert!(transcript.iter().rev().skip(1).all(|t| !t.is_final));
    assert!(transcript.last().unwrap().is_final);
}

#[tokio::test]
async fn transcript_length_tracks_iteration_count() {
    for k in 0..=5u32 {
        let mut responses = vec![Scripted::reply("DRAFT")];
        for i in 0..k {
            responses.push(Scripted::reply(format!("NOTES {i}")));
            responses.push(Scripted::reply(format!("REV {i}")));
        }
        let driver = ScriptedDriver::new(responses);
        let mut session = SketchSession::new(driver, config(k)).unwrap();

        session.run(&EventSink::discard()).await.unwrap();
        assert_eq!(session.transcript().len(), (1 + 2 * k) as usize);
    }
}

#[tokio::test]
async fn truncated_draft_is_continued() {
    let driver = Arc::new(ScriptedDriver::new(vec![
        Scripted::truncated("PART ONE "),
        Scripted::reply("PART TWO"),
    ]));
    let mut session = SketchSession::new(driver.clone(), config(0)).unwrap();

    let (sink, mut rx) = EventSink::channel();
    let script = session.run(&sink).await.unwrap();
    drop(sink);

    assert_eq!(script, "PART ONE PART TWO");

    let mut saw_warning = false;
    while let Some(event) = rx.recv().await {
        if matches!(event, SessionEvent::Warning { .. }) {
            saw_warning = true;
        }
    }
    assert!(saw_warning);

    // The continuation call replays the partial text and asks to resume.
    let requests = driver.recorded_requests();
    assert_eq!(requests.len(), 2);
    let continuation = &requests[1];
    assert!(
        continuation
            .messages
            .iter()
            .any(|m| m.role == Role::Assistant && m.content == "PART ONE ")
    );
    assert!(
        continuation
            .messages
            .last()
            .unwrap()
            .content
            .starts_with("Continue writing")
    );
}

#[tokio::test]
async fn empty_draft_is_an_error() {
    let driver = ScriptedDriver::new(vec![Scripted::reply("  \n")]);
    let mut session = SketchSession::new(driver, config(2)).unwrap();

    let err = session.run(&EventSink::discard()).await.unwrap_err();
    match err.kind() {
        GoldoniErrorKind::Session(session_err) => {
            assert!(matches!(session_err.kind, SessionErrorKind::EmptyDraft));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn critic_failure_aborts_with_the_right_tag() {
    let driver = ScriptedDriver::new(vec![
        Scripted::reply("DRAFT"),
        Scripted::Fail("rate limited".to_string()),
    ]);
    let mut session = SketchSession::new(driver, config(1)).unwrap();

    let err = session.run(&EventSink::discard()).await.unwrap_err();
    match err.kind() {
        GoldoniErrorKind::Session(session_err) => match &session_err.kind {
            SessionErrorKind::AgentInvocation { speaker, round, .. } => {
                assert_eq!(*speaker, Speaker::Critic);
                assert_eq!(*round, 1);
            }
            other => panic!("unexpected session error: {other}"),
        },
        other => panic!("unexpected error kind: {other}"),
    }
    assert_eq!(session.transcript().len(), 1);
    assert!(session.final_script().is_none());
}

#[tokio::test]
async fn playwright_keeps_its_history_and_critic_stays_stateless() {
    let driver = Arc::new(ScriptedDriver::new(vec![
        Scripted::reply("DRAFT"),
        Scripted::reply("NOTES"),
        Scripted::reply("REV"),
    ]));
    let mut session = SketchSession::new(driver.clone(), config(1)).unwrap();
    session.run(&EventSink::discard()).await.unwrap();

    // The revision request replays the playwright's draft exchange.
    let requests = driver.recorded_requests();
    let revise = &requests[2];
    assert!(
        revise
            .messages
            .iter()
            .any(|m| m.role == Role::Assistant && m.content == "DRAFT")
    );

    // The critic sees only the quoted draft, never the playwright's history.
    let critic = &requests[1];
    assert_eq!(critic.messages.len(), 1);
    assert!(critic.messages[0].content.contains("DRAFT"));

    // No critic-authored turn ends up in the playwright's history.
    assert!(
        session
            .playwright_history()
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .all(|m| m.content == "DRAFT" || m.content == "REV")
    );
}

#[tokio::test]
async fn critic_uses_the_smaller_token_budget() {
    let driver = Arc::new(ScriptedDriver::new(vec![
        Scripted::reply("DRAFT"),
        Scripted::reply("NOTES"),
        Scripted::reply("REV"),
    ]));
    let mut session = SketchSession::new(driver.clone(), config(1)).unwrap();
    session.run(&EventSink::discard()).await.unwrap();

    let requests = driver.recorded_requests();
    assert_eq!(requests.len(), 3);
    let draft_budget = requests[0].max_tokens.unwrap();
    let critic_budget = requests[1].max_tokens.unwrap();
    let revise_budget = requests[2].max_tokens.unwrap();
    assert!(critic_budget < draft_budget);
    assert_eq!(draft_budget, revise_budget);
}

#[tokio::test]
async fn iteration_count_above_cap_is_rejected() {
    let driver = ScriptedDriver::new(vec![]);
    let err = SketchSession::new(driver, config(9))
        .err()
        .expect("iteration count above the cap must be rejected");
    match err.kind() {
        GoldoniErrorKind::Session(session_err) => {
            assert!(matches!(
                session_err.kind,
                SessionErrorKind::MalformedConfiguration(_)
            ));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn monologue_rewrite_trims_the_response() {
    let driver = Arc::new(ScriptedDriver::new(vec![Scripted::reply(
        "  So there I was, arguing with a photocopier.  \n",
    )]));

    let monologue = rewrite_as_monologue(&*driver, "TITLE\nA: hello", "English")
        .await
        .unwrap();

    assert_eq!(monologue, "So there I was, arguing with a photocopier.");
    let requests = driver.recorded_requests();
    assert_eq!(requests.len(), 1);
    let system = requests[0].system.as_deref().unwrap();
    assert!(system.contains("stand-up comedian"));
    assert!(
        requests[0]
            .messages
            .last()
            .unwrap()
            .content
            .contains("TITLE\nA: hello")
    );
}
