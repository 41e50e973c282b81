//! Scriptable UART for unit tests

use std::collections::VecDeque;

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

use disco_common::SerialConfig;
use spin::Mutex;

use crate::console::Console;
use crate::hal::{Platform, UartStatus};

pub(crate) struct MockPlatform {
    rdr: Mutex<VecDeque<u8>>,
    tx: Mutex<Vec<u8>>,
    config: Mutex<Option<SerialConfig>>,
    baud: AtomicU32,
    rx_irq: AtomicBool,
    overrun: AtomicBool,
    tx_busy: AtomicUsize,
    status_polls: AtomicUsize,
}

impl MockPlatform {
    pub(crate) fn new() -> Self {
        MockPlatform {
            rdr: Mutex::new(VecDeque::new()),
            tx: Mutex::new(Vec::new()),
            config: Mutex::new(None),
            baud: AtomicU32::new(0),
            rx_irq: AtomicBool::new(false),
            overrun: AtomicBool::new(false),
            tx_busy: AtomicUsize::new(0),
            status_polls: AtomicUsize::new(0),
        }
    }

    /// A leaked mock and a console on top of it
    pub(crate) fn console() -> (&'static MockPlatform, Console) {
        let mock: &'static MockPlatform = Box::leak(Box::new(MockPlatform::new()));
        (mock, Console::new(mock))
    }

    /// A console whose ring already holds `input`
    pub(crate) fn console_with_input(input: &[u8]) -> (&'static MockPlatform, Console) {
        let (mock, console) = Self::console();
        mock.receive(input);
        console.on_rx_interrupt();
        (mock, console)
    }

    /// Bytes "on the wire", picked up by the next interrupt
    pub(crate) fn receive(&self, bytes: &[u8]) {
        self.rdr.lock().extend(bytes.iter().copied());
    }

    pub(crate) fn rdr_empty(&self) -> bool {
        self.rdr.lock().is_empty()
    }

    pub(crate) fn take_tx(&self) -> Vec<u8> {
        core::mem::take(&mut *self.tx.lock())
    }

    /// Report the transmitter busy for the next `polls` status reads
    pub(crate) fn hold_tx(&self, polls: usize) {
        self.tx_busy.store(polls, Ordering::SeqCst);
        self.status_polls.store(0, Ordering::SeqCst);
    }

    pub(crate) fn tx_polls(&self) -> usize {
        self.status_polls.load(Ordering::SeqCst)
    }

    pub(crate) fn set_overrun(&self) {
        self.overrun.store(true, Ordering::SeqCst);
    }

    pub(crate) fn overrun(&self) -> bool {
        self.overrun.load(Ordering::SeqCst)
    }

    pub(crate) fn config(&self) -> Option<SerialConfig> {
        *self.config.lock()
    }

    pub(crate) fn baud(&self) -> u32 {
        self.baud.load(Ordering::SeqCst)
    }

    pub(crate) fn rx_interrupt_enabled(&self) -> bool {
        self.rx_irq.load(Ordering::SeqCst)
    }
}

impl Platform for MockPlatform {
    fn uart_status(&self) -> UartStatus {
        self.status_polls.fetch_add(1, Ordering::SeqCst);

        let mut status = UartStatus::empty();
        if !self.rdr.lock().is_empty() {
            status |= UartStatus::RXNE;
        }
        if self.overrun.load(Ordering::SeqCst) {
            status |= UartStatus::ORE;
        }
        let busy = self.tx_busy.load(Ordering::SeqCst);
        if busy == 0 {
            status |= UartStatus::TXE;
        } else {
            self.tx_busy.store(busy - 1, Ordering::SeqCst);
        }
        status
    }

    fn uart_read_byte(&self) -> u8 {
        self.rdr.lock().pop_front().unwrap_or(0)
    }

    fn uart_write_byte(&self, byte: u8) {
        self.tx.lock().push(byte);
    }

    fn uart_configure(&self, config: &SerialConfig) {
        *self.config.lock() = Some(*config);
        self.baud.store(config.baud, Ordering::SeqCst);
    }

    fn uart_set_baud(&self, baud: u32) {
        self.baud.store(baud, Ordering::SeqCst);
    }

    fn enable_receive_interrupt(&self) {
        self.rx_irq.store(true, Ordering::SeqCst);
    }

    fn clear_overrun(&self) {
        self.overrun.store(false, Ordering::SeqCst);
    }

    fn system_reset(&self) -> ! {
        panic!("system reset");
    }
}
