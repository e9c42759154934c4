//! # Flowboard
//!
//! State and synchronization core for a kanban task board backed by a
//! hosted database service.
//!
//! This library provides:
//! - The task entity model and its derived column/count views
//! - A remote store adapter over Supabase PostgREST
//! - A board state manager with confirm-first status updates
//! - A drag-and-drop coordinator driving the board's move operation
//!
//! ## Architecture
//!
//! ```text
//!   pointer events          search/form input
//!        │                        │
//!        ▼                        ▼
//! ┌────────────────┐      ┌──────────────┐     ┌───────────────────┐
//! │ DragCoordinator│─────▶│    Board     │────▶│ TaskStore         │
//! │  (gesture FSM) │ move │ (task state) │     │ (Supabase adapter)│
//! └────────────────┘      └──────┬───────┘     └───────────────────┘
//!                                │
//!                                ▼
//!                         Notify (toasts)
//! ```
//!
//! ## Update flow
//! 1. A drag ends over a column (or a form submits a draft)
//! 2. The board confirms the write against the remote store
//! 3. Only on success does the in-memory sequence change
//! 4. Either way a notification event reports the outcome
//!
//! Rendering, routing, authentication screens, and the chat panel are the
//! embedding shell's concern; the core only exposes state and events.

pub mod board;
pub mod config;
pub mod deadline;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod notify;
pub mod session;
pub mod store;

pub use board::Board;
pub use config::Config;
pub use dnd::DragCoordinator;
pub use model::{Task, TaskDraft, TaskPriority, TaskStatus};
pub use notify::{ChannelNotifier, Notification, NotificationKind, Notify};
pub use session::Session;
pub use store::{StoreError, SupabaseStore, TaskStore};
