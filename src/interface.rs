//! The operations an AHT20 driver needs from its platform.
//!
//! Addresses are 8-bit values in the driver's convention (`0x70` write, `0x71` read for
//! the AHT20), lengths are 16-bit, and every bus call blocks until the transfer is done
//! or the platform gives up.

use core::fmt;

/// AHT20 address with the R/W bit, write direction.
pub const AHT20_WRITE_ADDRESS: u8 = 0x70;
/// AHT20 address with the R/W bit, read direction.
pub const AHT20_READ_ADDRESS: u8 = 0x71;

pub trait Aht20Interface {
    type Error: fmt::Debug;

    /// Prepare the bus. Currently always succeeds.
    fn iic_init(&mut self) -> Result<(), Self::Error>;

    /// Release the bus. Currently always succeeds.
    fn iic_deinit(&mut self) -> Result<(), Self::Error>;

    /// Receive `len` bytes from `addr` into `buf[..len]`.
    fn iic_read(&mut self, addr: u8, buf: &mut [u8], len: u16) -> Result<(), Self::Error>;

    /// Transmit `buf[..len]` to `addr`.
    fn iic_write(&mut self, addr: u8, buf: &[u8], len: u16) -> Result<(), Self::Error>;

    fn delay_ms(&mut self, ms: u32);

    /// Use through [`debug_print!`](crate::debug_print).
    fn debug_print(&mut self, args: fmt::Arguments<'_>);
}

impl<T: Aht20Interface + ?Sized> Aht20Interface for &mut T {
    type Error = T::Error;

    fn iic_init(&mut self) -> Result<(), Self::Error> {
        (**self).iic_init()
    }

    fn iic_deinit(&mut self) -> Result<(), Self::Error> {
        (**self).iic_deinit()
    }

    fn iic_read(&mut self, addr: u8, buf: &mut [u8], len: u16) -> Result<(), Self::Error> {
        (**self).iic_read(addr, buf, len)
    }

    fn iic_write(&mut self, addr: u8, buf: &[u8], len: u16) -> Result<(), Self::Error> {
        (**self).iic_write(addr, buf, len)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn debug_print(&mut self, args: fmt::Arguments<'_>) {
        (**self).debug_print(args)
    }
}
