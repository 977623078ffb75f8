//! Message routing and cross-domain coordination types.

use iced::Task;
use userdeck_model::{AccountStatus, CurrentUser, UserId};

use crate::domains::directory;
use crate::domains::directory::messages::BulkAction;
use crate::domains::session;
use crate::domains::ui;

/// Result of a domain update: the follow-up task plus events to broadcast.
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages).
    pub task: Task<DomainMessage>,
    /// Events to broadcast to the other domains immediately.
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    /// An update with no follow-up work.
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    /// Create a result with just a task.
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with a single event and no task.
    pub fn event(event: CrossDomainEvent) -> Self {
        Self {
            task: Task::none(),
            events: vec![event],
        }
    }

    /// Create a result with a task and events.
    pub fn with_events(
        task: Task<DomainMessage>,
        events: Vec<CrossDomainEvent>,
    ) -> Self {
        Self { task, events }
    }

    /// Add an event to this result.
    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("task", &"Task(..)")
            .field("events", &self.events)
            .finish()
    }
}

/// The main domain message router.
#[derive(Clone)]
pub enum DomainMessage {
    /// Session domain (authentication store)
    Session(session::messages::Message),

    /// User directory domain
    Directory(directory::messages::Message),

    /// UI/routing domain
    Ui(ui::messages::Message),

    /// Cross-domain event for coordination
    Event(CrossDomainEvent),

    NoOp,
}

impl From<session::messages::Message> for DomainMessage {
    fn from(msg: session::messages::Message) -> Self {
        DomainMessage::Session(msg)
    }
}

impl From<directory::messages::Message> for DomainMessage {
    fn from(msg: directory::messages::Message) -> Self {
        DomainMessage::Directory(msg)
    }
}

impl From<ui::messages::Message> for DomainMessage {
    fn from(msg: ui::messages::Message) -> Self {
        DomainMessage::Ui(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Session(msg) => msg.name(),
            Self::Directory(msg) => msg.name(),
            Self::Ui(msg) => msg.name(),
            Self::Event(_) => "DomainMessage::Event",
            Self::NoOp => "DomainMessage::NoOp",
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Session(msg) => write!(f, "DomainMessage::Session({:?})", msg),
            Self::Directory(msg) => {
                write!(f, "DomainMessage::Directory({:?})", msg)
            }
            Self::Ui(msg) => write!(f, "DomainMessage::Ui({:?})", msg),
            Self::Event(event) => {
                write!(f, "DomainMessage::Event({:?})", event)
            }
            Self::NoOp => write!(f, "DomainMessage::NoOp"),
        }
    }
}

/// Why an established session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevocationReason {
    /// The operator signed out.
    UserInitiated,
    /// A bulk block confirmed the operator's own id.
    SelfBlocked,
    /// A bulk delete confirmed the operator's own id.
    SelfDeleted,
    /// The pre-action privilege check failed or came back revoked.
    PrivilegeCheckFailed,
}

/// Cross-domain event bus for coordination.
#[derive(Clone, Debug)]
pub enum CrossDomainEvent {
    /// A session was established; carries the signed-in operator.
    SessionEstablished(CurrentUser),

    /// The session ended; every domain returns to its signed-out posture.
    SessionRevoked(RevocationReason),

    /// The server confirmed a status change for the operator's own account.
    SelfStatusChanged(AccountStatus),

    /// A bulk mutation was confirmed for the given ids.
    BulkActionCompleted {
        action: BulkAction,
        ids: Vec<UserId>,
    },

    /// A bulk mutation failed; the directory was left untouched.
    BulkActionFailed {
        action: BulkAction,
        message: String,
    },
}
