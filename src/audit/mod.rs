//! Audit trail for the expense tracker
//!
//! Every add and delete is appended to a line-delimited JSON log together
//! with a snapshot of the expense, so the `history` command can show what
//! changed and when.

mod entry;
mod logger;

pub use entry::{AuditEntry, Change};
pub use logger::AuditLog;
