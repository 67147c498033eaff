//! # Mock Betting Client
//!
//! Presentation-side state for the mock betting game. A [`Session`] drives
//! a [`Backend`] and keeps snapshot views of races, matches, betting
//! history, rankings and the chat room.
//!
//! [`SandboxBackend`] runs the betting contract in an in-process Soroban
//! host, which is what the game uses in place of a deployed network.
//!
//! ```no_run
//! use mock_betting_client::{ClientConfig, SandboxBackend, Session};
//!
//! let config = ClientConfig::default().with_env_overrides();
//! mock_betting_client::telemetry::init(&config)?;
//!
//! let mut session = Session::new(SandboxBackend::new(&config)?);
//! session.sign_up("경마왕")?;
//! session.place_bet(1, 3, "5,000")?;
//! # Ok::<(), mock_betting_client::ClientError>(())
//! ```

pub mod backend;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod sandbox;
pub mod session;
pub mod telemetry;
pub mod views;

#[cfg(test)]
mod testing;

pub use backend::Backend;
pub use chat::{ChatEntry, ChatView};
pub use config::ClientConfig;
pub use error::{ClientError, InputError};
pub use input::{parse_amount, HorseSelection};
pub use sandbox::SandboxBackend;
pub use session::Session;
pub use views::SnapshotView;
