//! The turn state machine and its presentation boundary.
//!
//! - `Engine`: pure transitions over immutable `MatchState` snapshots
//! - `Session`: holds the latest snapshot and drives human and AI seats
//! - `Intent` / `Event`: inbound requests and outbound notifications

pub mod engine;
pub mod event;
pub mod intent;
pub mod phase;
pub mod session;
pub mod state;
pub mod view;

pub use engine::{Engine, Transition};
pub use event::Event;
pub use intent::{Intent, IntentError, Proposal};
pub use phase::{Offer, Phase, Slot};
pub use session::{Seat, Session};
pub use state::MatchState;
pub use view::PlayerView;
