//! Database access layer
//!
//! One module per table. Every read filters `is_deleted = FALSE`;
//! deletion is always the soft-delete transition on the entity base
//! columns, never a DELETE.

pub mod attendance;
pub mod departments;
pub mod employees;
pub mod entity;
pub mod leave_requests;
pub mod users;
