//! Formatted debug print with a fixed-size line buffer.
//!
//! The rendered text never exceeds [`DEBUG_CAPACITY`] characters. Longer output is cut
//! silently, always on a UTF-8 character boundary, and the line is then handed to a
//! [`DebugSink`]. Which sink is used on hardware is selected by feature:
//! `semihosting` (hprint through the debugger) or `rtt` (RTT channel 0).

use core::fmt::{self, Write};

use heapless::String;

/// Usable characters in one debug line.
pub const DEBUG_CAPACITY: usize = 255;

pub type DebugLine = String<DEBUG_CAPACITY>;

/// Where rendered debug lines go.
pub trait DebugSink {
    fn emit(&mut self, line: &str);
}

impl<S: DebugSink + ?Sized> DebugSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn emit(&mut self, _line: &str) {}
}

/// Prints through the debugger with semihosting. Slow, and halts the core if no
/// debugger is attached.
#[cfg(feature = "semihosting")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SemihostingSink;

#[cfg(feature = "semihosting")]
impl DebugSink for SemihostingSink {
    fn emit(&mut self, line: &str) {
        cortex_m_semihosting::hprint!("{}", line);
    }
}

/// Prints on RTT channel 0. The application must call `rtt_init_print!()` first.
#[cfg(feature = "rtt")]
#[derive(Debug, Default, Clone, Copy)]
pub struct RttSink;

#[cfg(feature = "rtt")]
impl DebugSink for RttSink {
    fn emit(&mut self, line: &str) {
        rtt_target::rprint!("{}", line);
    }
}

struct Truncating<'a> {
    line: &'a mut DebugLine,
    truncated: bool,
}

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let room = DEBUG_CAPACITY - self.line.len();
        let mut end = s.len().min(room);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        if end < s.len() {
            self.truncated = true;
        }
        self.line.push_str(&s[..end]).map_err(|_| fmt::Error)
    }
}

/// Render `args` into a fresh line. The flag is true when text was dropped.
pub fn render(args: fmt::Arguments<'_>) -> (DebugLine, bool) {
    let mut line = DebugLine::new();
    let mut w = Truncating { line: &mut line, truncated: false };
    // a failing Display impl just ends the line early
    let _ = w.write_fmt(args);
    let truncated = w.truncated;
    (line, truncated)
}

/// Print a formatted line through an [`Aht20Interface`](crate::Aht20Interface).
///
/// ```
/// use aht20_interface::{debug_print, Aht20Interface};
/// # fn demo(iface: &mut impl Aht20Interface) {
/// debug_print!(iface, "aht20: status 0x{:02X}\n", 0x1C);
/// # }
/// ```
#[macro_export]
macro_rules! debug_print {
    ($iface:expr, $($arg:tt)*) => {
        $crate::Aht20Interface::debug_print($iface, ::core::format_args!($($arg)*))
    };
}
