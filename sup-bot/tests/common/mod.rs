//! Shared test doubles: a recording [`Bot`], a scripted [`LocationRepository`], message builders,
//! and a tracing layer that captures events so tests can assert on logs.

#![allow(dead_code)]

use std::fmt::{Debug, Write as _};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot, Chat, DbotError, Message, MessageType, Result, TextFormat, User};
use storage::{LocationRecord, LocationRepository, StorageError, UpdateOutcome};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub const CHAT_ID: i64 = 456;

/// Username the bot under test runs as (what getMe would return).
pub const BOT_USERNAME: &str = "sup_bot";

pub fn bot_username() -> Option<String> {
    Some(BOT_USERNAME.to_string())
}

/// One recorded send.
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub format: TextFormat,
}

/// Mock Bot that records every send. `failing_sends` makes the first N sends return an error
/// (still recorded).
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
    failing_sends: Mutex<usize>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_first(n: usize) -> Arc<Self> {
        let bot = Self::default();
        *bot.failing_sends.lock().unwrap() = n;
        Arc::new(bot)
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_formatted(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<()> {
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            format,
        });
        let mut failing = self.failing_sends.lock().unwrap();
        if *failing > 0 {
            *failing -= 1;
            return Err(DbotError::Bot("Bad Request: can't parse entities".to_string()));
        }
        Ok(())
    }
}

/// What the mock repository answers.
#[derive(Clone)]
enum Script {
    Rows(Vec<LocationRecord>),
    Fail(String),
}

/// Mock repository that answers every call from a script and records `(owner, units)` calls.
pub struct MockLocationRepo {
    script: Script,
    calls: Mutex<Vec<(i64, u32)>>,
}

impl MockLocationRepo {
    pub fn returning(rows: Vec<LocationRecord>) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Rows(rows),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn with_location(name: Option<&str>) -> Arc<Self> {
        Self::returning(vec![location(name)])
    }

    pub fn empty() -> Arc<Self> {
        Self::returning(Vec::new())
    }

    pub fn failing(detail: &str) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Fail(detail.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(i64, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocationRepository for MockLocationRepo {
    async fn set_available_units(&self, owner_telegram_id: i64, units: u32) -> UpdateOutcome {
        self.calls.lock().unwrap().push((owner_telegram_id, units));
        match &self.script {
            Script::Rows(rows) => UpdateOutcome::from_rows(rows.clone()),
            Script::Fail(detail) => UpdateOutcome::Failed(StorageError::Api {
                status: 500,
                body: detail.clone(),
            }),
        }
    }
}

pub fn location(name: Option<&str>) -> LocationRecord {
    LocationRecord {
        id: Some(serde_json::json!(1)),
        name: name.map(str::to_string),
        available_units: None,
        owner_telegram_id: None,
    }
}

/// Text message from `user_id` named `first_name` in [`CHAT_ID`].
pub fn text_message(user_id: i64, first_name: &str, content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: user_id,
            username: Some("owner".to_string()),
            first_name: Some(first_name.to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: MessageType::Text,
        created_at: Utc::now(),
    }
}

/// Message without text (e.g. a photo).
pub fn non_text_message(user_id: i64) -> Message {
    Message {
        content: String::new(),
        message_type: MessageType::Other,
        ..text_message(user_id, "Anna", "")
    }
}

/// One captured tracing event: level and all fields rendered as `name=value`.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: String,
}

/// Layer collecting every event; clone it before installing to read the events back.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<CapturedEvent>>>);

impl CapturedLogs {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().unwrap().clone()
    }

    /// Events at `level` whose fields contain `needle`.
    pub fn matching(&self, level: Level, needle: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level && e.fields.contains(needle))
            .collect()
    }
}

struct FieldsVisitor(String);

impl Visit for FieldsVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let _ = write!(self.0, "{}={} ", field.name(), value);
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldsVisitor(String::new());
        event.record(&mut visitor);
        self.0.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

/// Installs a capturing subscriber for the current thread. Keep the guard alive for the test;
/// `#[tokio::test]` runs on one thread, so events from awaited handlers are captured.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(logs.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
