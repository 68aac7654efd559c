//! `embedded-hal` 1.0 binding of [`Aht20Interface`].
//!
//! The shim owns a blocking I2C bus, a delay and a debug sink, and forwards each
//! operation to them. Nothing is retried or logged here: the first bus error goes
//! straight back to the driver.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::debug::{render, DebugSink};
use crate::error::Error;
use crate::interface::Aht20Interface;

/// How the driver's 8-bit addresses map onto the 7-bit address `embedded-hal` expects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    /// Address carries the R/W bit in bit 0 (`0x70`/`0x71`), shift it out.
    #[default]
    EightBit,
    /// Address is already 7-bit (`0x38`).
    SevenBit,
}

impl AddressMode {
    pub fn to_seven_bit(self, addr: u8) -> u8 {
        match self {
            AddressMode::EightBit => addr >> 1,
            AddressMode::SevenBit => addr,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShimConfig {
    pub address_mode: AddressMode,
}

pub struct Aht20Shim<I2C, D, S> {
    i2c: I2C,
    delay: D,
    sink: S,
    config: ShimConfig,
}

impl<I2C, D, S> Aht20Shim<I2C, D, S>
where
    I2C: I2c,
    D: DelayNs,
    S: DebugSink,
{
    pub fn new(i2c: I2C, delay: D, sink: S) -> Self {
        Self::with_config(i2c, delay, sink, ShimConfig::default())
    }

    pub fn with_config(i2c: I2C, delay: D, sink: S, config: ShimConfig) -> Self {
        Aht20Shim { i2c, delay, sink, config }
    }

    pub fn config(&self) -> ShimConfig {
        self.config
    }

    /// Give back the bus, delay and sink.
    pub fn release(self) -> (I2C, D, S) {
        (self.i2c, self.delay, self.sink)
    }
}

fn checked_len<E>(len: u16, capacity: usize) -> Result<usize, Error<E>> {
    let n = usize::from(len);
    if n > capacity {
        return Err(Error::Length { len, capacity });
    }
    Ok(n)
}

impl<I2C, D, S> Aht20Interface for Aht20Shim<I2C, D, S>
where
    I2C: I2c,
    D: DelayNs,
    S: DebugSink,
{
    type Error = Error<I2C::Error>;

    // Bus hardware is brought up by the platform setup (see `i2c::setup_i2c2`).
    fn iic_init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn iic_deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn iic_read(&mut self, addr: u8, buf: &mut [u8], len: u16) -> Result<(), Self::Error> {
        let n = checked_len(len, buf.len())?;
        let addr = self.config.address_mode.to_seven_bit(addr);
        self.i2c.read(addr, &mut buf[..n]).map_err(Error::Bus)
    }

    fn iic_write(&mut self, addr: u8, buf: &[u8], len: u16) -> Result<(), Self::Error> {
        let n = checked_len(len, buf.len())?;
        let addr = self.config.address_mode.to_seven_bit(addr);
        self.i2c.write(addr, &buf[..n]).map_err(Error::Bus)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn debug_print(&mut self, args: fmt::Arguments<'_>) {
        let (line, _truncated) = render(args);
        self.sink.emit(&line);
    }
}
