//! The AHT20 measurement trigger as the driver issues it through the interface:
//! write 0x70 [0xBE, 0x08, 0x00], wait 80 ms, read 7 bytes from 0x71.

use core::cell::RefCell;

use aht20_interface::{
    debug_print, Aht20Interface, Aht20Shim, Error, NullSink, Status, AHT20_READ_ADDRESS,
    AHT20_WRITE_ADDRESS,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

const AHT20: u8 = 0x38;
const TRIGGER: [u8; 3] = [0xBE, 0x08, 0x00];

// taken from a run of the sensor: status, 5 data bytes, crc
const SAMPLE: [u8; 7] = [0x1C, 0x65, 0xB4, 0x25, 0xCD, 0x26, 0xC6];

#[derive(Default)]
struct Waits(Vec<u32>);

impl DelayNs for Waits {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(ns / 1_000_000);
    }
    fn delay_ms(&mut self, ms: u32) {
        self.0.push(ms);
    }
}

#[derive(Default)]
struct Lines(Vec<String>);

impl aht20_interface::DebugSink for Lines {
    fn emit(&mut self, line: &str) {
        self.0.push(line.to_owned());
    }
}

#[test]
fn trigger_wait_read() {
    let expectations = [
        Transaction::write(AHT20, TRIGGER.to_vec()),
        Transaction::read(AHT20, SAMPLE.to_vec()),
    ];
    let mut shim = Aht20Shim::new(I2cMock::new(&expectations), Waits::default(), NullSink);

    let w = shim.iic_write(AHT20_WRITE_ADDRESS, &TRIGGER, 3);
    assert_eq!(Status::from_result(&w), 0);

    shim.delay_ms(80);

    let mut buf = [0u8; 7];
    let r = shim.iic_read(AHT20_READ_ADDRESS, &mut buf, 7);
    assert_eq!(Status::from_result(&r), 0);
    assert_eq!(buf, SAMPLE);

    let (mut i2c, waits, _) = shim.release();
    assert_eq!(waits.0, [80]);
    i2c.done();
}

#[test]
fn failed_read_leaves_buffer_untouched() {
    let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data);
    let expectations = [
        Transaction::write(AHT20, TRIGGER.to_vec()),
        Transaction::read(AHT20, SAMPLE.to_vec()).with_error(nack),
    ];
    let mut shim = Aht20Shim::new(I2cMock::new(&expectations), NoopDelay::new(), NullSink);

    assert!(shim.iic_write(AHT20_WRITE_ADDRESS, &TRIGGER, 3).is_ok());
    shim.delay_ms(80);

    let mut buf = [0x55u8; 7];
    let r = shim.iic_read(AHT20_READ_ADDRESS, &mut buf, 7);
    assert_eq!(r, Err(Error::Bus(nack)));
    assert_ne!(Status::from_result(&r), 0);
    assert_eq!(buf, [0x55; 7]);

    let (mut i2c, _, _) = shim.release();
    i2c.done();
}

#[test]
fn failed_write_is_reported_on_its_own() {
    let expectations = [
        Transaction::write(AHT20, TRIGGER.to_vec()).with_error(ErrorKind::ArbitrationLoss),
        Transaction::write(AHT20, TRIGGER.to_vec()),
    ];
    let mut shim = Aht20Shim::new(I2cMock::new(&expectations), NoopDelay::new(), Lines::default());

    // the caller decides to try again, the shim does not
    let first = shim.iic_write(AHT20_WRITE_ADDRESS, &TRIGGER, 3);
    assert_eq!(Status::from_result(&first), Status::Busy as u8);
    if let Err(e) = &first {
        debug_print!(&mut shim, "aht20: write failed: {}.\n", e);
    }
    let second = shim.iic_write(AHT20_WRITE_ADDRESS, &TRIGGER, 3);
    assert_eq!(Status::from_result(&second), 0);

    let (mut i2c, _, lines) = shim.release();
    assert_eq!(lines.0.len(), 1);
    assert!(lines.0[0].starts_with("aht20: write failed: i2c transfer failed"));
    i2c.done();
}

#[test]
fn bus_shared_outside_the_shim() {
    let expectations = [
        Transaction::write(AHT20, TRIGGER.to_vec()),
        Transaction::write(0x3C, vec![0x00, 0xAF]),
        Transaction::read(AHT20, SAMPLE.to_vec()),
    ];
    let bus = RefCell::new(I2cMock::new(&expectations));

    {
        let mut shim = Aht20Shim::new(RefCellDevice::new(&bus), NoopDelay::new(), NullSink);
        let mut display = RefCellDevice::new(&bus);

        shim.iic_write(AHT20_WRITE_ADDRESS, &TRIGGER, 3).unwrap();
        embedded_hal::i2c::I2c::write(&mut display, 0x3C, &[0x00, 0xAF]).unwrap();
        shim.delay_ms(80);

        let mut buf = [0u8; 7];
        shim.iic_read(AHT20_READ_ADDRESS, &mut buf, 7).unwrap();
        assert_eq!(buf, SAMPLE);
    }

    bus.into_inner().done();
}
