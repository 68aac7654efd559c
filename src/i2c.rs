//! I2C2 bring-up for the boards the shim is tested on.
//!
//! Note that pin settings are specific to a board pin configuration used for testing,
//! despite the cfg feature flags suggesting it may be for a HAL.
//! The shim itself only needs something implementing `embedded_hal::i2c::I2c`, so any
//! other bus setup works as well.

/// Maximum wait for one transfer, in the HAL's timeout unit (us for the BlockingI2c hals).
/// Not configurable per call.
///
/// Only the stm32f1xx and stm32f7xx setups can pass it on. The stm32f4xx, stm32h7xx and
/// stm32l4xx hals poll status flags without a limit, so with those a stuck bus blocks
/// `iic_read`/`iic_write` forever instead of failing after this timeout.
pub const IIC_TIMEOUT: u16 = 0xFFFF;

/// Bus speed used on all boards.
pub const IIC_FREQUENCY_HZ: u32 = 100_000;


#[cfg(feature = "stm32f1xx")]
use stm32f1xx_hal::{
    i2c::{BlockingI2c, DutyCycle, Mode},
    pac::I2C2,
    gpio::{gpiob::{PB10, PB11, Parts}, Alternate, OpenDrain},
    rcc::Clocks,
    prelude::*,
};

#[cfg(feature = "stm32f1xx")]
pub type I2c2Type = BlockingI2c<I2C2, (PB10<Alternate<OpenDrain>>, PB11<Alternate<OpenDrain>>)>;

#[cfg(feature = "stm32f1xx")]
pub fn setup_i2c2(i2c2: I2C2, mut gpiob: Parts, &clocks: &Clocks) -> I2c2Type {
    let timeout = u32::from(IIC_TIMEOUT);
    BlockingI2c::i2c2(
        i2c2,
        (
            gpiob.pb10.into_alternate_open_drain(&mut gpiob.crh), // scl on PB10
            gpiob.pb11.into_alternate_open_drain(&mut gpiob.crh), // sda on PB11
        ),
        Mode::Standard {
            frequency: IIC_FREQUENCY_HZ.Hz(),
        },
        clocks,
        timeout, // start
        10,      // start retries
        timeout, // address
        timeout, // data
    )
}


#[cfg(feature = "stm32f4xx")]
use stm32f4xx_hal::{
    i2c::I2c,
    gpio::gpiob::Parts as PartsB,
    rcc::Clocks,
    pac::I2C2,
    prelude::*,
};

#[cfg(feature = "stm32f4xx")]
pub type I2c2Type = I2c<I2C2>;

#[cfg(feature = "stm32f4xx")]
pub fn setup_i2c2(i2c2: I2C2, gpiob: PartsB, clocks: &Clocks) -> I2c2Type {
    //  (scl, sda) using I2C2  on (PB10 _af4, PB3 _af9)
    let scl = gpiob.pb10.into_alternate_open_drain();
    let sda = gpiob.pb3.into_alternate_open_drain();

    // this hal polls without a timeout, a missing device shows up as a NACK
    I2c::new(i2c2, (scl, sda), IIC_FREQUENCY_HZ.Hz(), clocks)
}


#[cfg(feature = "stm32f7xx")]
use stm32f7xx_hal::{
    gpio::{Alternate, OpenDrain, gpiob::{PB10, PB11, Parts as PartsB}},
    i2c::{BlockingI2c, Mode},
    rcc::{Clocks, APB1},
    pac::I2C2,
    prelude::*,
};

#[cfg(feature = "stm32f7xx")]
pub type I2c2Type = BlockingI2c<I2C2, PB10<Alternate<4u8, OpenDrain>>, PB11<Alternate<4u8, OpenDrain>>>;

#[cfg(feature = "stm32f7xx")]
pub fn setup_i2c2(i2c2: I2C2, gpiob: PartsB, &clocks: &Clocks, apb1: &mut APB1) -> I2c2Type {
    let scl = gpiob.pb10.into_alternate_open_drain();
    let sda = gpiob.pb11.into_alternate_open_drain();

    BlockingI2c::i2c2(
        i2c2,
        (scl, sda),
        Mode::Standard {
            frequency: IIC_FREQUENCY_HZ.Hz(),
        },
        &clocks,
        apb1,
        u32::from(IIC_TIMEOUT),
    )
}


#[cfg(feature = "stm32h7xx")]
use stm32h7xx_hal::{
    gpio::gpiob::Parts as PartsB,
    i2c::I2c,
    pac::I2C2,
    rcc::{CoreClocks, rec::I2c2},
    prelude::*,
};

#[cfg(feature = "stm32h7xx")]
pub type I2c2Type = I2c<I2C2>;

#[cfg(feature = "stm32h7xx")]
pub fn setup_i2c2(i2c2: I2C2, gpiob: PartsB, rec: I2c2, clocks: &CoreClocks) -> I2c2Type {
    let scl = gpiob.pb10.into_alternate::<4>().set_open_drain();
    let sda = gpiob.pb11.into_alternate::<4>().set_open_drain();
    i2c2.i2c((scl, sda), IIC_FREQUENCY_HZ.Hz(), rec, clocks)
}


#[cfg(feature = "stm32l4xx")]
use stm32l4xx_hal::{
    gpio::{OpenDrain, Alternate, gpiob::{PB10, PB11, Parts}},
    i2c::{Config, I2c},
    rcc::{Clocks, APB1R1},
    pac::I2C2,
    prelude::*,
};

#[cfg(feature = "stm32l4xx")]
pub type I2c2Type = I2c<I2C2, (PB10<Alternate<OpenDrain, 4u8>>, PB11<Alternate<OpenDrain, 4u8>>)>;

#[cfg(feature = "stm32l4xx")]
pub fn setup_i2c2(i2c2: I2C2, mut gpiob: Parts, &clocks: &Clocks, apb1r1: &mut APB1R1) -> I2c2Type {
    let mut scl = gpiob.pb10.into_alternate_open_drain(&mut gpiob.moder, &mut gpiob.otyper, &mut gpiob.afrh);
    scl.internal_pull_up(&mut gpiob.pupdr, true);

    let mut sda = gpiob.pb11.into_alternate_open_drain(&mut gpiob.moder, &mut gpiob.otyper, &mut gpiob.afrh);
    sda.internal_pull_up(&mut gpiob.pupdr, true);

    I2c::i2c2(i2c2, (scl, sda), Config::new(IIC_FREQUENCY_HZ.Hz(), clocks), apb1r1)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_maximum_wait() {
        assert_eq!(IIC_TIMEOUT, u16::MAX);
        assert_eq!(u32::from(IIC_TIMEOUT), 65_535);
    }
}
