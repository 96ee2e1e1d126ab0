//! Route handlers organized by resource

pub mod folders;
pub mod health;
pub mod notes;
