//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Text file reading/writing with encodings
//! - Recent files list
//! - File dialog filters
//! - Text operations

pub mod file_filters;
pub mod file_io;
pub mod recent_files;
pub mod text_ops;
