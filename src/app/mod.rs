//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages)
//! - `controllers/` - Orchestration (document flows, sidebar animation)
//! - `services/` - Business operations (file I/O, recent files, text ops)
//! - `infrastructure/` - Error types
//! - `state.rs` - Main window controller

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::document::{DocumentController, Notifier, Prompter, UnsavedChoice};
pub use controllers::sidebar::SidebarAnimator;
pub use domain::{AppSettings, Document, DocumentState, Message, ThemeName};
pub use infrastructure::error::{AppError, Result};
pub use services::recent_files::RecentFiles;
