// Rust guideline compliant 2026-10-16

//! Command implementations for the CampusPulse CLI.
//!
//! Each command returns the rendered output; `main` decides where it goes.

pub mod classify;
pub mod feed;
pub mod init;
pub mod mine;
pub mod set_status;
pub mod show;
pub mod stats;
pub mod submit;
