//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Document lifecycle (open, save, save as, new, close)
//! - Sidebar visibility animation

pub mod document;
pub mod sidebar;
