//! End-to-end flows through the public router API
//!
//! These tests drive the same `Router` the Telegram handlers use, with a
//! temporary file id record, and assert on the replies it decides to send.
//! Run with: cargo test --test bot_flow_test

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use teloxide::types::MessageId;

use posbot::storage::{ArtifactSource, FileIdStore, FileSlot, SlotDefaults, StaticFallback};
use posbot::telegram::{
    messages, Action, Actor, AdminState, BotSettings, Command, ConversationState, Inbound, InboundKind, Router,
    SessionStore,
};

const ADMIN_ID: i64 = 555;
const USER_ID: i64 = 777;

/// Router plus the directory holding its record and fallback files
struct TestBot {
    dir: TempDir,
    router: Router,
}

impl TestBot {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let router = build_router(&dir);
        Self { dir, router }
    }

    /// Simulates a process restart: same record on disk, fresh sessions
    fn restart(self) -> Self {
        let router = build_router(&self.dir);
        Self { dir: self.dir, router }
    }

    fn send(&self, user_id: i64, kind: InboundKind) -> Vec<Action> {
        let actor = Actor::new(user_id).with_first_name("Tester");
        self.router.dispatch(&Inbound::new(actor, kind))
    }

    fn command(&self, user_id: i64, cmd: Command) -> Vec<Action> {
        self.send(user_id, InboundKind::Command(cmd))
    }

    fn answer(&self, user_id: i64, slot: FileSlot) -> Vec<Action> {
        self.send(
            user_id,
            InboundKind::Answer {
                slot: Some(slot),
                message_id: Some(MessageId(1)),
            },
        )
    }

    fn upload(&self, user_id: i64, file_id: &str) -> Vec<Action> {
        self.send(
            user_id,
            InboundKind::Document {
                file_id: file_id.to_string(),
                file_name: Some("pos_yes.zip".to_string()),
            },
        )
    }
}

fn build_router(dir: &TempDir) -> Router {
    let settings = BotSettings {
        admin_id: Some(ADMIN_ID),
        fallback: StaticFallback {
            pos_yes: SlotDefaults {
                file_id: None,
                path: dir.path().join("pos_yes.zip"),
            },
            pos_no: SlotDefaults {
                file_id: None,
                path: dir.path().join("pos_no.zip"),
            },
        },
    };
    Router::new(
        FileIdStore::new(dir.path().join("file_ids.json")),
        settings,
        Arc::new(SessionStore::new()),
    )
}

fn delivered(actions: &[Action]) -> Option<&ArtifactSource> {
    actions.iter().find_map(|action| match action {
        Action::Document { source, .. } => Some(source),
        _ => None,
    })
}

#[test]
fn test_admin_registers_file_then_user_receives_it() {
    let bot = TestBot::new();

    bot.command(ADMIN_ID, Command::SetYesSlot);
    bot.upload(ADMIN_ID, "ABC123");

    let report = bot.command(ADMIN_ID, Command::ListFileIds);
    match report.as_slice() {
        [Action::Text(text)] => {
            assert!(text.contains("POS YES: ABC123"), "report was: {}", text);
            assert!(text.contains("POS NO: not set"), "report was: {}", text);
        }
        other => panic!("unexpected report: {:?}", other),
    }

    let prompt = bot.command(USER_ID, Command::Start);
    assert!(matches!(prompt.as_slice(), [Action::Prompt(text)] if text.contains("Hello, Tester!")));

    let actions = bot.answer(USER_ID, FileSlot::PosYes);
    assert_eq!(delivered(&actions), Some(&ArtifactSource::FileId("ABC123".to_string())));
    assert_eq!(bot.router.conversation_state(USER_ID), ConversationState::Idle);
}

#[test]
fn test_fresh_store_with_missing_fallback_file_apologizes() {
    let bot = TestBot::new();
    bot.command(USER_ID, Command::Start);

    let actions = bot.answer(USER_ID, FileSlot::PosYes);

    assert_eq!(delivered(&actions), None);
    assert_eq!(actions.last(), Some(&Action::Text(messages::FILE_UNAVAILABLE.to_string())));
}

#[test]
fn test_local_file_is_used_before_first_admin_upload() {
    let bot = TestBot::new();
    let path = bot.dir.path().join("pos_no.zip");
    std::fs::write(&path, b"PK\x03\x04").expect("Failed to write archive");

    let actions = bot.answer(USER_ID, FileSlot::PosNo);
    assert_eq!(delivered(&actions), Some(&ArtifactSource::Path(path)));

    bot.command(ADMIN_ID, Command::SetNoSlot);
    bot.upload(ADMIN_ID, "NO-ID");

    let actions = bot.answer(USER_ID, FileSlot::PosNo);
    assert_eq!(delivered(&actions), Some(&ArtifactSource::FileId("NO-ID".to_string())));
}

#[test]
fn test_non_admin_cannot_register_files() {
    let bot = TestBot::new();

    let actions = bot.command(USER_ID, Command::SetYesSlot);
    assert_eq!(actions, vec![Action::Text(messages::ADMIN_DENIED.to_string())]);
    assert_eq!(bot.router.admin_state(USER_ID), AdminState::Idle);

    bot.upload(USER_ID, "EVIL");
    assert!(bot.router.store().snapshot().is_empty());
}

#[test]
fn test_restart_keeps_files_but_drops_sessions() {
    let bot = TestBot::new();
    bot.command(ADMIN_ID, Command::SetYesSlot);
    bot.upload(ADMIN_ID, "KEEP-ME");
    bot.command(USER_ID, Command::Start);
    bot.command(ADMIN_ID, Command::SetNoSlot);

    let bot = bot.restart();

    assert_eq!(bot.router.conversation_state(USER_ID), ConversationState::Idle);
    assert_eq!(bot.router.admin_state(ADMIN_ID), AdminState::Idle);
    assert_eq!(
        bot.send(USER_ID, InboundKind::Other),
        vec![Action::Text(messages::RESTART_HINT.to_string())]
    );

    // The old keyboard still works after a restart
    let actions = bot.answer(USER_ID, FileSlot::PosYes);
    assert_eq!(delivered(&actions), Some(&ArtifactSource::FileId("KEEP-ME".to_string())));
}

#[test]
fn test_repeated_noise_while_awaiting_answer_is_idempotent() {
    let bot = TestBot::new();
    bot.command(USER_ID, Command::Start);

    let first = bot.send(USER_ID, InboundKind::Other);
    let second = bot.send(USER_ID, InboundKind::Other);

    assert_eq!(first, second);
    assert_eq!(bot.router.conversation_state(USER_ID), ConversationState::AwaitingAnswer);
    assert!(!bot.dir.path().join("file_ids.json").exists());
}
