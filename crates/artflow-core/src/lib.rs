//! # ArtFlow Core Library
//!
//! This library provides the core logic for ArtFlow, a wellness tracker built
//! around timed art-therapy activities. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary; any
//! graphical front end is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Countdown Timer**: a tick-driven state machine; the caller delivers
//!   one `tick()` per elapsed second while the timer runs
//! - **Activity Flow**: orchestrates activity selection, the countdown, and
//!   recording the result as a session
//! - **Session Log + Statistics**: an append-only history with a pure
//!   statistics deriver over it
//! - **Storage**: whole-snapshot JSON persistence in a SQLite `kv` table and
//!   TOML-based configuration
//!
//! ## Key Components
//!
//! - [`CountdownTimer`]: core timer state machine
//! - [`ActivityFlow`]: session orchestration and tick-source ownership
//! - [`stats`]: derived figures the progress pages show
//! - [`Authenticator`]: account management over the snapshot store
//! - [`Database`]: user snapshot persistence
//! - [`Config`]: application configuration management

pub mod activity;
pub mod auth;
pub mod error;
pub mod events;
pub mod flow;
pub mod profile;
pub mod session;
pub mod stats;
pub mod storage;
pub mod timer;

pub use activity::{ActivityCatalog, ActivityModule, ActivityTemplate};
pub use auth::Authenticator;
pub use error::{AuthError, ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use flow::{ActivityFlow, TickHandle};
pub use profile::UserProfile;
pub use session::{Session, SessionLog};
pub use stats::Summary;
pub use storage::{Config, Database};
pub use timer::{CountdownTimer, TimerState};
