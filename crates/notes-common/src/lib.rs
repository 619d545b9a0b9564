//! Shared catalog, quiz, and progress logic for the NoteNexus front-end.
//!
//! Everything here is client-side and synchronous. Content comes from the
//! embedded sample catalog, "AI" features are scripted responses, and long
//! running operations are simulated by timers behind the [`timer::Timers`]
//! trait so they can be driven by a manual clock in tests.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod generator;
pub mod normalization;
pub mod progress;
pub mod quiz;
pub mod responses;
pub mod scoring;
pub mod suggestions;
pub mod tags;
pub mod timer;
pub mod types;
pub mod upload;
pub mod voice;

pub use error::{NotesError, Result};
