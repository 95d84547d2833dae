//! Core module - configuration, session, stores, and display support

pub mod config;
pub mod demo;
pub mod paging;
pub mod session;
pub mod store;

pub use config::Config;
pub use paging::Pager;
pub use session::{Session, SessionError, User, UserRole};
pub use store::{ActionStore, ResourceStore};
