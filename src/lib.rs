//! NaradAI Console
//!
//! A terminal client for the NaradAI social-intelligence platform:
//! analytics views for authenticated users and an admin content manager
//! for the eight dashboard resources, all backed by the REST API.

pub mod api;
pub mod cli;
pub mod core;
pub mod entities;
