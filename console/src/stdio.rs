//! Standard I/O shim
//!
//! File-descriptor style `read`/`write` over the console, for code written
//! against the C library's buffered stdio hooks, plus `core::fmt` writers
//! behind the `print!` family of macros.
//!
//! Descriptors 0, 1 and 2 are accepted by both calls. Writes to stderr are
//! wrapped in yellow when color is enabled. Reads hand out one edited line
//! at a time, in as many pieces as the caller asks for.

use core::fmt;

use disco_common::{ConsoleError, ConsoleResult, Fd, TermColor};

use crate::console::Console;

/// Longest line a stdio read collects
pub const STDIO_LINE_LEN: usize = 128;

/// Line collected for `read`, and how far callers have consumed it
pub(crate) struct PendingLine {
    buf: [u8; STDIO_LINE_LEN + 2],
    next: Option<usize>,
}

impl PendingLine {
    pub(crate) const fn new() -> Self {
        PendingLine {
            buf: [0; STDIO_LINE_LEN + 2],
            next: None,
        }
    }
}

impl Console {
    /// Write `bytes` to `fd`, stopping early at a NUL.
    /// Line feeds go out as CRLF. Returns the number of bytes consumed.
    pub fn write(&self, fd: i32, bytes: &[u8]) -> ConsoleResult<usize> {
        let fd = Fd::from_raw(fd).ok_or(ConsoleError::BadFileDescriptor(fd))?;

        if fd == Fd::Stderr {
            self.puts(self.color(TermColor::Yellow).as_bytes());
        }

        let mut written = 0;
        for &c in bytes.iter().take_while(|&&c| c != 0) {
            self.putc(c);
            written += 1;
        }

        if fd == Fd::Stderr {
            self.puts(self.color(TermColor::None).as_bytes());
        }

        Ok(written)
    }

    /// Copy the next piece of the pending input line into `out`.
    ///
    /// When no line is pending this edits a new one first, so a call waits
    /// for input at most once. A returned count of 0 only happens for an
    /// empty `out`.
    pub fn read(&self, fd: i32, out: &mut [u8]) -> ConsoleResult<usize> {
        Fd::from_raw(fd).ok_or(ConsoleError::BadFileDescriptor(fd))?;

        let mut pending = self.pending.lock();
        let PendingLine { buf, next } = &mut *pending;

        let start = match *next {
            Some(cursor) => cursor,
            None => {
                self.gets(buf, STDIO_LINE_LEN);
                0
            }
        };

        let available = &buf[start..];
        let end = available
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(available.len());
        let count = end.min(out.len());
        out[..count].copy_from_slice(&available[..count]);

        let cursor = start + count;
        *next = match buf.get(cursor) {
            Some(&c) if c != 0 => Some(cursor),
            _ => None,
        };

        Ok(count)
    }

    /// `write` with the C return convention: count, or a negative error
    pub fn sys_write(&self, fd: i32, bytes: &[u8]) -> isize {
        match self.write(fd, bytes) {
            Ok(n) => n as isize,
            Err(e) => e.to_return_value(),
        }
    }

    /// `read` with the C return convention: count, or a negative error
    pub fn sys_read(&self, fd: i32, out: &mut [u8]) -> isize {
        match self.read(fd, out) {
            Ok(n) => n as isize,
            Err(e) => e.to_return_value(),
        }
    }

    /// Format `args` onto `fd` as a single write per fragment
    pub fn write_fmt_to(&self, fd: Fd, args: fmt::Arguments) -> fmt::Result {
        match fd {
            Fd::Stderr => {
                self.puts(self.color(TermColor::Yellow).as_bytes());
                let result = fmt::write(&mut Stdout(self), args);
                self.puts(self.color(TermColor::None).as_bytes());
                result
            }
            _ => fmt::write(&mut Stdout(self), args),
        }
    }
}

/// `fmt::Write` adapter for descriptor 1
pub struct Stdout<'a>(pub &'a Console);

impl fmt::Write for Stdout<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0
            .write(Fd::Stdout as i32, s.as_bytes())
            .map(|_| ())
            .map_err(|_| fmt::Error)
    }
}

/// `fmt::Write` adapter for descriptor 2, colored per fragment
pub struct Stderr<'a>(pub &'a Console);

impl fmt::Write for Stderr<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0
            .write(Fd::Stderr as i32, s.as_bytes())
            .map(|_| ())
            .map_err(|_| fmt::Error)
    }
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    if let Some(console) = crate::console() {
        let _ = console.write_fmt_to(Fd::Stdout, args);
    }
}

#[doc(hidden)]
pub fn _eprint(args: fmt::Arguments) {
    if let Some(console) = crate::console() {
        let _ = console.write_fmt_to(Fd::Stderr, args);
    }
}

/// Print to the console
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::stdio::_print(format_args!($($arg)*)));
}

/// Print to the console, with a newline
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}

/// Print to the console's stderr (yellow when color is on)
#[macro_export]
macro_rules! eprint {
    ($($arg:tt)*) => ($crate::stdio::_eprint(format_args!($($arg)*)));
}

/// Print to the console's stderr, with a newline
#[macro_export]
macro_rules! eprintln {
    () => ($crate::eprint!("\n"));
    ($($arg:tt)*) => ($crate::eprint!("{}\n", format_args!($($arg)*)));
}
