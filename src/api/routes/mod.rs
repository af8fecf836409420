//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dashboard;
pub mod forms;
pub mod health;
pub mod password;
