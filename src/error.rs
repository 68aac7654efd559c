//! Failures reported by the interface shim.
//!
//! The upper driver only distinguishes success from failure, so everything here
//! collapses to a nonzero [`Status`] in the end. The HAL error is kept verbatim
//! in [`Error::Bus`] for callers that want to look closer.

use core::fmt;

use embedded_hal::i2c::ErrorKind;

/// 8-bit status codes as returned by the vendor HAL transceive calls.
///
/// `embedded-hal` has no timeout kind (HALs report a timeout as `ErrorKind::Other`),
/// so a timed out transfer shows up as `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    Error = 1,
    Busy = 2,
}

impl Status {
    /// Collapse a call result into the code the upper driver layer checks.
    pub fn from_result<T, E: StatusCode>(result: &Result<T, E>) -> u8 {
        match result {
            Ok(_) => Status::Ok as u8,
            Err(e) => e.status() as u8,
        }
    }
}

impl From<ErrorKind> for Status {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            // another master holds the bus
            ErrorKind::ArbitrationLoss => Status::Busy,
            _ => Status::Error,
        }
    }
}

/// Anything that can be reported to the driver as a nonzero status.
pub trait StatusCode {
    fn status(&self) -> Status;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The I2C transfer failed. Timeouts, NACKs and bus faults all land here.
    Bus(E),
    /// `len` is larger than the buffer handed in with it.
    Length { len: u16, capacity: usize },
}

impl<E: embedded_hal::i2c::Error> Error<E> {
    pub fn status(&self) -> Status {
        Status::from(embedded_hal::i2c::Error::kind(self))
    }
}

impl<E: embedded_hal::i2c::Error> StatusCode for Error<E> {
    fn status(&self) -> Status {
        Error::status(self)
    }
}

impl<E: embedded_hal::i2c::Error> embedded_hal::i2c::Error for Error<E> {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Bus(e) => e.kind(),
            Error::Length { .. } => ErrorKind::Other,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "i2c transfer failed: {:?}", e),
            Error::Length { len, capacity } => {
                write!(f, "length {} exceeds buffer of {} bytes", len, capacity)
            }
        }
    }
}
