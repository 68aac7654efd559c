// Platform interface for an AHT20 temperature/humidity driver:
//   i2c read/write, millisecond delay and debug print on top of embedded-hal 1.0.
//   See demos/ for use on hardware.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod debug;
pub mod interface;
pub mod shim;
pub mod i2c;
pub mod delay;

pub use crate::debug::{DebugSink, NullSink, DEBUG_CAPACITY};
pub use crate::error::{Error, Status, StatusCode};
pub use crate::interface::{Aht20Interface, AHT20_READ_ADDRESS, AHT20_WRITE_ADDRESS};
pub use crate::shim::{AddressMode, Aht20Shim, ShimConfig};
pub use crate::i2c::IIC_TIMEOUT;

#[cfg(feature = "semihosting")]
pub use crate::debug::SemihostingSink;

#[cfg(feature = "rtt")]
pub use crate::debug::RttSink;
