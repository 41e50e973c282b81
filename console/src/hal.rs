//! Hardware boundary of the console
//!
//! The driver never touches registers itself. Everything it needs from the
//! UART and the core is expressed as a [`Platform`], implemented by the board
//! firmware on the real peripheral and by a mock in tests.
//!
//! All methods take `&self`: the interrupt handler and the foreground share
//! one `&'static` platform, and MMIO registers are interior mutable anyway.

use bitflags::bitflags;
use disco_common::SerialConfig;

bitflags! {
    /// UART status bits the driver looks at
    ///
    /// Bit positions match the STM32F7 `USART_ISR` register so the firmware
    /// can hand the raw register value to `from_bits_truncate`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UartStatus: u32 {
        /// Overrun error, a byte arrived while RDR was still full
        const ORE = 1 << 3;
        /// Read data register not empty
        const RXNE = 1 << 5;
        /// Transmit data register empty
        const TXE = 1 << 7;
    }
}

/// Hardware-abstraction collaborator consumed by the console
pub trait Platform: Sync {
    /// Current UART status flags
    fn uart_status(&self) -> UartStatus;

    /// Read the receive data register
    fn uart_read_byte(&self) -> u8;

    /// Write the transmit data register; the caller has already seen `TXE`
    fn uart_write_byte(&self, byte: u8);

    /// Apply the full line configuration and enable transmitter and receiver
    fn uart_configure(&self, config: &SerialConfig);

    /// Change only the baud rate
    fn uart_set_baud(&self, baud: u32);

    /// Unmask the receive interrupt at the UART and the interrupt controller
    fn enable_receive_interrupt(&self);

    /// Acknowledge an overrun so the receive interrupt stops re-firing
    fn clear_overrun(&self) {}

    /// Restart the whole system, never returns
    fn system_reset(&self) -> !;
}
