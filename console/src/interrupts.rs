use crate::console::Console;
use crate::hal::UartStatus;

/// ETX (^C); restarts the board when `reset-on-ctrl-c` is enabled
pub const CANCEL_BYTE: u8 = 0x03;

impl Console {
    /// Receive interrupt handler.
    ///
    /// Drains every byte the UART has ready, so back-to-back arrivals are
    /// handled in one entry. Bytes that find the ring full are lost. Must be
    /// the only caller of the ring's producer side.
    pub fn on_rx_interrupt(&self) {
        let mut received = false;

        loop {
            let status = self.platform.uart_status();
            if status.contains(UartStatus::ORE) {
                self.platform.clear_overrun();
            }
            if !status.contains(UartStatus::RXNE) {
                break;
            }

            let byte = self.platform.uart_read_byte();
            if cfg!(feature = "reset-on-ctrl-c") && byte == CANCEL_BYTE {
                self.platform.system_reset();
            }

            let _ = self.rx.push(byte);
            received = true;
        }

        if received {
            self.rx_waker.wake();
        }
    }
}
