//! Driver metadata and binding state.

/// Static metadata describing a driver module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverInfo {
    /// Short name the framework lists the driver under (e.g. "pci_stub_runpm").
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Module author(s).
    pub author: &'static str,
    /// License identifier.
    pub license: &'static str,
    /// Module version.
    pub version: &'static str,
}

/// Binding state of one driver/device pair.
///
/// Tracked by the framework, not by drivers.
///
/// ```text
/// Unattached --probe ok--> Active
/// Unattached --probe err--> Unattached
/// Active --suspend--> Suspended
/// Suspended --resume ok--> Active
/// Suspended --resume err--> Suspended
/// Active | Suspended --remove--> Unattached
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindState {
    /// No driver bound.
    #[default]
    Unattached,
    /// Bound and runtime-active.
    Active,
    /// Bound and runtime-suspended.
    Suspended,
}

impl BindState {
    /// State after a probe attempt.
    #[must_use]
    pub const fn after_probe(probe_ok: bool) -> Self {
        if probe_ok { Self::Active } else { Self::Unattached }
    }

    /// State after a runtime suspend callback.
    ///
    /// A failed suspend keeps the device where it was.
    #[must_use]
    pub const fn after_suspend(self, suspend_ok: bool) -> Self {
        match (self, suspend_ok) {
            (Self::Active, true) => Self::Suspended,
            (state, _) => state,
        }
    }

    /// State after a runtime resume callback.
    ///
    /// A failed resume keeps the device suspended.
    #[must_use]
    pub const fn after_resume(self, resume_ok: bool) -> Self {
        match (self, resume_ok) {
            (Self::Suspended, true) => Self::Active,
            (state, _) => state,
        }
    }

    /// State after removal, which cannot fail.
    #[must_use]
    pub const fn after_remove(self) -> Self {
        Self::Unattached
    }

    /// Returns `true` while a driver is bound.
    #[must_use]
    pub const fn is_bound(self) -> bool {
        !matches!(self, Self::Unattached)
    }
}
