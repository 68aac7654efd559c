//! Trigger AHT20 measurements through the interface shim and print the raw bytes
//! over RTT (channel 0), read on the host with a debugger attached.
//!
//! Unlike semihosting, RTT does not halt the core on each print, so the timing of the
//! trigger/wait/read sequence is what the sensor sees in normal operation.
//! The sensor is on I2C2 (scl PB10, sda PB3).
//!
//!  cargo build --target thumbv7em-none-eabihf --features stm32f4xx,stm32f411,rtt --example aht20-interface-rtt

#![deny(unsafe_code)]
#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::rtt_init_print;

use cortex_m_rt::entry;

use stm32f4xx_hal::{
    pac::Peripherals,
    prelude::*,
};

use aht20_interface::{
    debug_print, delay::CycleDelay, i2c::setup_i2c2, Aht20Interface, Aht20Shim, RttSink, Status,
    AHT20_READ_ADDRESS, AHT20_WRITE_ADDRESS,
};

const TRIGGER: [u8; 3] = [0xBE, 0x08, 0x00];

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = Peripherals::take().unwrap();

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let i2c2 = setup_i2c2(dp.I2C2, dp.GPIOB.split(), &clocks);
    let delay = CycleDelay::for_board();

    let mut aht = Aht20Shim::new(i2c2, delay, RttSink);
    debug_print!(&mut aht, "aht20-interface rtt demo\n");

    // sensor needs 40ms after power on
    aht.delay_ms(40);

    loop {
        let w = aht.iic_write(AHT20_WRITE_ADDRESS, &TRIGGER, 3);
        if Status::from_result(&w) != 0 {
            debug_print!(&mut aht, "aht20: write failed, status {}\n", Status::from_result(&w));
            aht.delay_ms(1000);
            continue;
        }

        aht.delay_ms(80);

        let mut buf = [0u8; 7];
        match aht.iic_read(AHT20_READ_ADDRESS, &mut buf, 7) {
            Ok(()) => debug_print!(&mut aht, "aht20: {:02X?}\n", buf),
            Err(e) => debug_print!(&mut aht, "aht20: read failed: {}\n", e),
        }

        aht.delay_ms(2000);
    }
}
