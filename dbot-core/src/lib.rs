//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message and user types, update
//! classification ([`UpdateKind`]) and tracing initialization. Transport-agnostic; used by
//! dbot-telegram, handler-chain and the application crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;
pub mod update;

pub use bot::{Bot, TextFormat};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, MessageType, ToCoreMessage, ToCoreUser, User};
pub use update::{Command, UpdateKind};
