//! Notification Port - User-facing notices
//!
//! Every recoverable failure ends up here as a notice instead of an error
//! bubbling into the host. Fire-and-forget, so the methods are synchronous.

/// Port for the host's notification area.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NotificationPort: Send + Sync {
    /// Informational hint (e.g. listing the summons folders that do exist).
    fn info(&self, message: &str);

    /// Recoverable problem the user should fix (missing folder, empty folder).
    fn warn(&self, message: &str);

    /// Something went wrong with the cast itself (no caster resolvable).
    fn error(&self, message: &str);
}
