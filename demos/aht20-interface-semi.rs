//! Trigger AHT20 measurements through the interface shim and print the raw bytes
//! with semihosting.
//!
//! The "semi" demos simplify testing of the interface alone, without display complications.
//! The sensor is on I2C2 (scl PB10, sda PB3).
//!
//!  cargo build --target thumbv7em-none-eabihf --features stm32f4xx,stm32f411,semihosting --example aht20-interface-semi

#![deny(unsafe_code)]
#![no_std]
#![no_main]

#[cfg(debug_assertions)]
use panic_semihosting as _;

#[cfg(not(debug_assertions))]
use panic_halt as _;

use cortex_m_rt::entry;

use stm32f4xx_hal::{
    pac::Peripherals,
    prelude::*,
};

use aht20_interface::{
    debug_print, delay::CycleDelay, i2c::setup_i2c2, Aht20Interface, Aht20Shim, SemihostingSink, Status,
    AHT20_READ_ADDRESS, AHT20_WRITE_ADDRESS,
};

const TRIGGER: [u8; 3] = [0xBE, 0x08, 0x00];

#[entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let i2c2 = setup_i2c2(dp.I2C2, dp.GPIOB.split(), &clocks);
    // default clocks run from the 16 MHz HSI
    let delay = CycleDelay::for_board();

    let mut aht = Aht20Shim::new(i2c2, delay, SemihostingSink);
    debug_print!(&mut aht, "aht20-interface demo\n");

    if aht.iic_init().is_err() {
        debug_print!(&mut aht, "aht20: iic init failed.\n");
    }

    // sensor needs 40ms after power on
    aht.delay_ms(40);

    loop {
        let w = aht.iic_write(AHT20_WRITE_ADDRESS, &TRIGGER, 3);
        if let Err(e) = &w {
            debug_print!(&mut aht, "aht20: write failed, status {}: {}\n", Status::from_result(&w), e);
            aht.delay_ms(1000);
            continue;
        }

        aht.delay_ms(80);

        let mut buf = [0u8; 7];
        let r = aht.iic_read(AHT20_READ_ADDRESS, &mut buf, 7);
        match &r {
            Ok(()) => debug_print!(&mut aht, "aht20: {:02X?}\n", buf),
            Err(e) => debug_print!(&mut aht, "aht20: read failed, status {}: {}\n", Status::from_result(&r), e),
        }

        aht.delay_ms(5000);
    }
}
