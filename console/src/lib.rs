#![cfg_attr(not(test), no_std)]

//! Interrupt-driven serial console
//!
//! Received bytes travel from the UART receive interrupt through a lock-free
//! ring buffer to the foreground, where a line editor, a tolerant number
//! parser and a stdio-style `read`/`write` shim consume them. Output is
//! blocking, one byte at a time.
//!
//! The hardware is reached only through [`hal::Platform`]. A program installs
//! one process-wide console with [`init`] and routes its UART interrupt
//! vector to [`on_rx_interrupt`]; the free functions below and the `print!`
//! macros then talk to that console.

use conquer_once::spin::OnceCell;
use disco_common::{ConsoleError, ConsoleResult, TermColor};

pub mod color;
pub mod console;
pub mod hal;
pub mod interrupts;
pub mod line;
pub mod logger;
pub mod number;
pub mod ring;
pub mod stdio;
pub mod stream;
pub mod tty;

#[cfg(test)]
mod mock;

pub use console::{Console, RX_BUF_SIZE};
pub use disco_common;
pub use hal::{Platform, UartStatus};
pub use interrupts::CANCEL_BYTE;
pub use logger::{init_logger, ConsoleLogger};
pub use number::{parse_number, NUMBER_SCAN_LEN};
pub use ring::RxRing;
pub use stdio::{Stderr, Stdout, STDIO_LINE_LEN};
pub use stream::RxStream;

static CONSOLE: OnceCell<Console> = OnceCell::uninit();

/// Install the process-wide console on `platform` and set up the UART
pub fn init(platform: &'static dyn Platform, baud: u32) -> ConsoleResult<&'static Console> {
    CONSOLE
        .try_init_once(|| Console::new(platform))
        .map_err(|_| ConsoleError::AlreadyInitialized)?;
    let console = CONSOLE.try_get().map_err(|_| ConsoleError::NotInitialized)?;
    console.setup(baud);
    Ok(console)
}

/// The process-wide console, if [`init`] has run
pub fn console() -> Option<&'static Console> {
    CONSOLE.try_get().ok()
}

fn installed() -> ConsoleResult<&'static Console> {
    console().ok_or(ConsoleError::NotInitialized)
}

/// Entry point for the UART receive interrupt vector
pub fn on_rx_interrupt() {
    if let Some(console) = console() {
        console.on_rx_interrupt();
    }
}

pub fn baud(rate: u32) {
    if let Some(console) = console() {
        console.set_baud(rate);
    }
}

pub fn color_enable() {
    if let Some(console) = console() {
        console.color_enable();
    }
}

pub fn color_disable() {
    if let Some(console) = console() {
        console.color_disable();
    }
}

/// Escape sequence for `which`; empty while color is off or before `init`
pub fn color(which: TermColor) -> &'static str {
    console().map_or("", |console| console.color(which))
}

pub fn putc(c: u8) {
    if let Some(console) = console() {
        console.putc(c);
    }
}

pub fn puts(s: &[u8]) {
    if let Some(console) = console() {
        console.puts(s);
    }
}

/// Received byte, or 0 without `wait` when nothing is queued or before `init`
pub fn getc(wait: bool) -> u8 {
    console().map_or(0, |console| console.getc(wait))
}

pub fn gets(buf: &mut [u8], max_len: usize) -> usize {
    console().map_or(0, |console| console.gets(buf, max_len))
}

pub fn getnumber() -> i32 {
    console().map_or(0, |console| console.getnumber())
}

pub fn read(fd: i32, buf: &mut [u8]) -> ConsoleResult<usize> {
    installed()?.read(fd, buf)
}

pub fn write(fd: i32, bytes: &[u8]) -> ConsoleResult<usize> {
    installed()?.write(fd, bytes)
}
