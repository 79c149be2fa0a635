//! Display formatting for terminal output
//!
//! Provides utilities for formatting budget data for terminal display.

pub mod category;
pub mod summary;

pub use category::format_category_details;
pub use summary::format_summary;
