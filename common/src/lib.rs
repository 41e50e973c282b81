#![no_std]

//! Shared types for the discovery-board console
//!
//! This crate contains types used by both the console driver and the board
//! firmware. No implementation logic belongs here - only definitions.

use thiserror::Error;

/// Terminal colors understood by `console::color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermColor {
    /// Reset to the terminal's default attributes
    #[default]
    None,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

/// File descriptors accepted by the stdio shim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Fd {
    Stdin = 0,
    Stdout = 1,
    Stderr = 2,
}

impl Fd {
    /// Map a raw descriptor, `None` for anything outside 0..=2
    pub fn from_raw(fd: i32) -> Option<Self> {
        match fd {
            0 => Some(Fd::Stdin),
            1 => Some(Fd::Stdout),
            2 => Some(Fd::Stderr),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    None,
    RtsCts,
}

/// Line settings handed to the UART when the console is set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    pub baud: u32,
    pub data_bits: u8,
    pub stop_bits: StopBits,
    pub parity: Parity,
    pub flow_control: FlowControl,
}

impl SerialConfig {
    /// 8N1 without flow control at the given rate
    pub const fn with_baud(baud: u32) -> Self {
        SerialConfig {
            baud,
            data_bits: 8,
            stop_bits: StopBits::One,
            parity: Parity::None,
            flow_control: FlowControl::None,
        }
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self::with_baud(115_200)
    }
}

/// Console error codes
/// Negative raw values follow the C library convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Descriptor other than stdin, stdout or stderr
    #[error("bad file descriptor: {0}")]
    BadFileDescriptor(i32),
    /// `init` was called a second time
    #[error("console already initialized")]
    AlreadyInitialized,
    /// The process-wide console has not been installed yet
    #[error("console not initialized")]
    NotInitialized,
    /// Another logger was installed first
    #[error("logger already set")]
    Logger,
}

impl ConsoleError {
    /// Convert error to the raw return value of `sys_read`/`sys_write`
    pub fn to_return_value(self) -> isize {
        match self {
            ConsoleError::BadFileDescriptor(_) => -1,
            ConsoleError::AlreadyInitialized => -2,
            ConsoleError::NotInitialized => -3,
            ConsoleError::Logger => -4,
        }
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
