//! System-level error codes.
//!
//! `ErrorCode` is a number plus the category that gives it meaning:
//!
//! - `Generic`: portable conditions, see [`Errc`]
//! - `System`: raw OS error numbers
//!
//! Zero means "no error" in every category and is the only falsy code.

use core::fmt;

use crate::primitives::{Absent, Present};
use crate::probe::SwapCaps;
use crate::truthy::Truthy;

/// Which numbering an [`ErrorCode`] value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Portable conditions (POSIX numbering).
    Generic,
    /// Raw operating system error numbers.
    System,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Category::Generic => "generic",
            Category::System => "system",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! define_errc {
    ($($variant:ident = $value:literal => $message:literal,)*) => {
        /// Portable error conditions.
        ///
        /// Values follow Linux errno numbering.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        #[non_exhaustive]
        pub enum Errc {
            $($variant = $value,)*
        }

        impl Errc {
            /// Look up the condition for a raw value.
            pub const fn from_raw(value: i32) -> Option<Self> {
                match value {
                    $($value => Some(Errc::$variant),)*
                    _ => None,
                }
            }

            pub const fn message(self) -> &'static str {
                match self {
                    $(Errc::$variant => $message,)*
                }
            }
        }
    };
}

define_errc! {
    OperationNotPermitted = 1 => "Operation not permitted",
    NoSuchFileOrDirectory = 2 => "No such file or directory",
    NoSuchProcess = 3 => "No such process",
    Interrupted = 4 => "Interrupted system call",
    IoError = 5 => "Input/output error",
    ArgumentListTooLong = 7 => "Argument list too long",
    BadFileDescriptor = 9 => "Bad file descriptor",
    ResourceUnavailableTryAgain = 11 => "Resource temporarily unavailable",
    NotEnoughMemory = 12 => "Cannot allocate memory",
    PermissionDenied = 13 => "Permission denied",
    BadAddress = 14 => "Bad address",
    DeviceOrResourceBusy = 16 => "Device or resource busy",
    FileExists = 17 => "File exists",
    CrossDeviceLink = 18 => "Invalid cross-device link",
    NoSuchDevice = 19 => "No such device",
    NotADirectory = 20 => "Not a directory",
    IsADirectory = 21 => "Is a directory",
    InvalidArgument = 22 => "Invalid argument",
    TooManyFilesOpen = 24 => "Too many open files",
    FileTooLarge = 27 => "File too large",
    NoSpaceOnDevice = 28 => "No space left on device",
    InvalidSeek = 29 => "Illegal seek",
    ReadOnlyFileSystem = 30 => "Read-only file system",
    BrokenPipe = 32 => "Broken pipe",
    ArgumentOutOfDomain = 33 => "Numerical argument out of domain",
    ResultOutOfRange = 34 => "Numerical result out of range",
    ResourceDeadlockWouldOccur = 35 => "Resource deadlock avoided",
    FilenameTooLong = 36 => "File name too long",
    FunctionNotSupported = 38 => "Function not implemented",
    DirectoryNotEmpty = 39 => "Directory not empty",
    ValueTooLarge = 75 => "Value too large for defined data type",
    IllegalByteSequence = 84 => "Invalid or incomplete multibyte or wide character",
    NotSupported = 95 => "Operation not supported",
    AddressInUse = 98 => "Address already in use",
    AddressNotAvailable = 99 => "Cannot assign requested address",
    ConnectionAborted = 103 => "Software caused connection abort",
    ConnectionReset = 104 => "Connection reset by peer",
    NotConnected = 107 => "Transport endpoint is not connected",
    TimedOut = 110 => "Connection timed out",
    ConnectionRefused = 111 => "Connection refused",
    OperationInProgress = 115 => "Operation now in progress",
    OperationCanceled = 125 => "Operation canceled",
}

impl fmt::Display for Errc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Truthy for Errc {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

/// A system-level error code: value plus category.
///
/// There is no `Default`; use [`ErrorCode::success`] for the falsy sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    value: i32,
    category: Category,
}

impl ErrorCode {
    #[inline]
    pub const fn new(value: i32, category: Category) -> Self {
        Self { value, category }
    }

    /// The "no error" code. Falsy.
    #[inline]
    pub const fn success() -> Self {
        Self::new(0, Category::Generic)
    }

    /// A raw OS error number.
    #[inline]
    pub const fn from_raw_os_error(value: i32) -> Self {
        Self::new(value, Category::System)
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        self.value != 0
    }

    /// The portable condition this code corresponds to, if any.
    ///
    /// System codes share POSIX numbering on the platforms this targets.
    pub const fn condition(&self) -> Option<Errc> {
        Errc::from_raw(self.value)
    }
}

impl Truthy for ErrorCode {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_error()
    }
}

// No moved-from state: transfers copy, so a moved-from error stays truthy.
impl SwapCaps for ErrorCode {
    type CustomExchange = Absent;
    type ExchangeNoPanic = Present;
    type TakeNoPanic = Absent;
    type Cloneable = Present;
    type DropNoPanic = Present;
}

impl SwapCaps for Errc {
    type CustomExchange = Absent;
    type ExchangeNoPanic = Present;
    type TakeNoPanic = Absent;
    type Cloneable = Present;
    type DropNoPanic = Present;
}

impl From<Errc> for ErrorCode {
    #[inline]
    fn from(errc: Errc) -> Self {
        Self::new(errc as i32, Category::Generic)
    }
}

impl PartialEq<Errc> for ErrorCode {
    fn eq(&self, other: &Errc) -> bool {
        self.condition() == Some(*other)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0 {
            return f.write_str("Success");
        }
        match self.category {
            #[cfg(feature = "std")]
            Category::System => {
                fmt::Display::fmt(&std::io::Error::from_raw_os_error(self.value), f)
            }
            _ => match self.condition() {
                Some(errc) => f.write_str(errc.message()),
                None => write!(f, "Unknown {} error {}", self.category, self.value),
            },
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ErrorCode {
    fn from(err: std::io::Error) -> Self {
        Self::from(&err)
    }
}

/// `io::ErrorKind` for each condition that has one.
#[cfg(feature = "std")]
const IO_KINDS: &[(std::io::ErrorKind, Errc)] = {
    use std::io::ErrorKind;
    &[
        (ErrorKind::NotFound, Errc::NoSuchFileOrDirectory),
        (ErrorKind::PermissionDenied, Errc::PermissionDenied),
        (ErrorKind::ConnectionRefused, Errc::ConnectionRefused),
        (ErrorKind::ConnectionReset, Errc::ConnectionReset),
        (ErrorKind::ConnectionAborted, Errc::ConnectionAborted),
        (ErrorKind::NotConnected, Errc::NotConnected),
        (ErrorKind::AddrInUse, Errc::AddressInUse),
        (ErrorKind::AddrNotAvailable, Errc::AddressNotAvailable),
        (ErrorKind::BrokenPipe, Errc::BrokenPipe),
        (ErrorKind::AlreadyExists, Errc::FileExists),
        (ErrorKind::WouldBlock, Errc::ResourceUnavailableTryAgain),
        (ErrorKind::InvalidInput, Errc::InvalidArgument),
        (ErrorKind::TimedOut, Errc::TimedOut),
        (ErrorKind::Interrupted, Errc::Interrupted),
        (ErrorKind::Unsupported, Errc::NotSupported),
        (ErrorKind::OutOfMemory, Errc::NotEnoughMemory),
    ]
};

#[cfg(feature = "std")]
impl From<&std::io::Error> for ErrorCode {
    fn from(err: &std::io::Error) -> Self {
        if let Some(raw) = err.raw_os_error() {
            return Self::from_raw_os_error(raw);
        }
        let kind = err.kind();
        IO_KINDS
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(Errc::IoError, |(_, errc)| *errc)
            .into()
    }
}

/// System codes are raw OS errors. Generic codes use Linux numbering, which
/// only matches the host's raw errors on Linux; elsewhere they go through
/// their `io::ErrorKind`.
#[cfg(feature = "std")]
impl From<ErrorCode> for std::io::Error {
    fn from(code: ErrorCode) -> Self {
        match code.category {
            Category::System => std::io::Error::from_raw_os_error(code.value),
            #[cfg(target_os = "linux")]
            Category::Generic => std::io::Error::from_raw_os_error(code.value),
            #[cfg(not(target_os = "linux"))]
            Category::Generic => {
                let kind = code
                    .condition()
                    .and_then(|errc| IO_KINDS.iter().find(|(_, e)| *e == errc))
                    .map_or(std::io::ErrorKind::Other, |(kind, _)| *kind);
                std::io::Error::new(kind, code.to_string())
            }
        }
    }
}
