//! POSIX error numbers as returned by device primitives.
//!
//! Primitives such as enable-device report failure with an errno; drivers
//! forward that code unchanged, so it is kept as an opaque newtype rather
//! than folded into a closed enum.

use core::fmt;

/// A positive error number (`EIO` is `Errno(5)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Errno(i32);

impl Errno {
    /// `ENOENT`: no such file or directory.
    pub const ENOENT: Self = Self(2);
    /// `EIO`: I/O error.
    pub const EIO: Self = Self(5);
    /// `ENOMEM`: out of memory.
    pub const ENOMEM: Self = Self(12);
    /// `EBUSY`: device or resource busy.
    pub const EBUSY: Self = Self(16);
    /// `ENODEV`: no such device.
    pub const ENODEV: Self = Self(19);
    /// `EINVAL`: invalid argument.
    pub const EINVAL: Self = Self(22);
    /// `ENOSYS`: function not implemented.
    pub const ENOSYS: Self = Self(38);

    /// Wraps a raw error number. Negative inputs (the kernel return
    /// convention) are normalised to their absolute value; `i32::MIN`
    /// saturates to `i32::MAX`.
    pub const fn new(code: i32) -> Self {
        Self(code.saturating_abs())
    }

    /// Returns the positive error number.
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns the negated number, as a kernel callback would return it.
    pub const fn to_neg(self) -> i32 {
        self.0.wrapping_neg()
    }

    /// Symbolic name for the well-known codes.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            2 => Some("ENOENT"),
            5 => Some("EIO"),
            12 => Some("ENOMEM"),
            16 => Some("EBUSY"),
            19 => Some("ENODEV"),
            22 => Some("EINVAL"),
            38 => Some("ENOSYS"),
            _ => None,
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "errno {}", self.0),
        }
    }
}
