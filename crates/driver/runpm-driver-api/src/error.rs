//! Driver error types.

use core::fmt;

use runpm_core::Errno;

/// Errors a driver callback or registry operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The enable-device primitive failed with the contained code.
    EnableFailed(Errno),
    /// Resume was requested while the device was not in D0.
    InvalidPowerState,
    /// The driver does not implement the requested callback.
    Unsupported,
    /// The registry already holds an entry with this name.
    AlreadyRegistered,
}

impl DriverError {
    /// The error number the framework reports for this error.
    #[must_use]
    pub const fn errno(self) -> Errno {
        match self {
            Self::EnableFailed(errno) => errno,
            Self::InvalidPowerState => Errno::EIO,
            Self::Unsupported => Errno::ENOSYS,
            Self::AlreadyRegistered => Errno::EBUSY,
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnableFailed(errno) => write!(f, "failed to enable device: {errno}"),
            Self::InvalidPowerState => f.write_str("device not in D0"),
            Self::Unsupported => f.write_str("operation not supported"),
            Self::AlreadyRegistered => f.write_str("driver already registered"),
        }
    }
}

impl From<DriverError> for Errno {
    fn from(err: DriverError) -> Self {
        err.errno()
    }
}
