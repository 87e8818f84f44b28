//! # Notedb Architecture
//!
//! Notedb is a small note (to-do) store: one JSON file holding an array of notes, with
//! create/read/update/delete over it. The library is the product; the `notedb` binary
//! is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, existence checks, board ordering             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait: create / read / update / delete         │
//! │  - JsonFileStore, InMemoryStore, SharedStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage Model
//!
//! Every mutation reads the whole file, changes the in-memory list and rewrites the
//! file in full. Ids come from a counter that starts one past the highest stored id
//! and only grows. Updating or deleting an id that is not there is not an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage contract and implementations
//! - [`model`]: The [`model::Note`] record
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
