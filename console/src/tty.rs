//! Character I/O primitives
//!
//! The only places the foreground waits. Both waits spin on the hardware
//! (transmit-ready) or on the receive ring; a hosted port would swap the
//! spin for a blocking wait here and nowhere else.

use crate::console::Console;
use crate::hal::UartStatus;

impl Console {
    /// Send one byte, waiting for the transmitter first.
    /// A line feed is followed by a carriage return.
    pub fn putc(&self, c: u8) {
        self.put_raw(c);
        if c == b'\n' {
            self.put_raw(b'\r');
        }
    }

    fn put_raw(&self, c: u8) {
        while !self.platform.uart_status().contains(UartStatus::TXE) {
            core::hint::spin_loop();
        }
        self.platform.uart_write_byte(c);
    }

    /// Take one received byte.
    ///
    /// With `wait` set this spins until a byte arrives. Without it an empty
    /// ring yields 0, which cannot be told apart from a received NUL.
    pub fn getc(&self, wait: bool) -> u8 {
        loop {
            if let Some(c) = self.rx.pop() {
                return c;
            }
            if !wait {
                return 0;
            }
            core::hint::spin_loop();
        }
    }

    /// Send bytes up to (not including) the first NUL, or all of `s`
    pub fn puts(&self, s: &[u8]) {
        for &c in s.iter().take_while(|&&c| c != 0) {
            self.putc(c);
        }
    }
}
