//! Terminal front-end over the NoteNexus catalog, quiz, and progress logic.

pub mod commands;
pub mod config;
pub mod ramp;
