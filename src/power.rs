//! Power lifecycle notifications emitted around bus activity.

/// Collaborator informed whenever the transport is about to touch the bus.
///
/// Both calls are fire-and-forget keep-alive signals: the transport never
/// waits for the device to reach an active power state before transferring.
pub trait PowerLifecycle {
    /// A bus exchange is about to start.
    fn mark_active(&self);

    /// The bus has gone quiet again.
    fn mark_idle(&self);
}

/// No-op lifecycle for setups without power management.
impl PowerLifecycle for () {
    fn mark_active(&self) {}

    fn mark_idle(&self) {}
}

impl<T: PowerLifecycle> PowerLifecycle for &T {
    fn mark_active(&self) {
        (**self).mark_active();
    }

    fn mark_idle(&self) {
        (**self).mark_idle();
    }
}
