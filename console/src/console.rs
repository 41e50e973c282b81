//! Console driver context
//!
//! One [`Console`] holds all mutable driver state: the receive ring, the
//! async waker, the color flag, the baud rate and the stdio pending line.
//! Access rules per field:
//!
//! | field      | written by                   | read by              |
//! |------------|------------------------------|----------------------|
//! | `rx` write | receive interrupt            | foreground (compare) |
//! | `rx` read  | foreground                   | interrupt (compare)  |
//! | `rx_waker` | foreground registers         | interrupt wakes      |
//! | `color`    | foreground                   | foreground           |
//! | `baud`     | foreground                   | foreground           |
//! | `pending`  | foreground (stdio shim only) | foreground           |

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use disco_common::SerialConfig;
use futures_util::task::AtomicWaker;
use log::{debug, info, warn};
use spin::Mutex;

use crate::hal::Platform;
use crate::ring::RxRing;
use crate::stdio::PendingLine;

/// Slots in the receive ring (127 usable bytes)
pub const RX_BUF_SIZE: usize = 128;

pub struct Console {
    pub(crate) platform: &'static dyn Platform,
    pub(crate) rx: RxRing<RX_BUF_SIZE>,
    pub(crate) rx_waker: AtomicWaker,
    pub(crate) color: AtomicBool,
    baud: AtomicU32,
    pub(crate) pending: Mutex<PendingLine>,
}

impl Console {
    /// Create a console on top of `platform`; the UART is not touched until
    /// [`Console::setup`].
    pub fn new(platform: &'static dyn Platform) -> Self {
        Console {
            platform,
            rx: RxRing::new(),
            rx_waker: AtomicWaker::new(),
            color: AtomicBool::new(true),
            baud: AtomicU32::new(0),
            pending: Mutex::new(PendingLine::new()),
        }
    }

    /// Configure the UART for 8N1 at `baud`, no flow control, and start
    /// taking receive interrupts.
    pub fn setup(&self, baud: u32) {
        let config = SerialConfig::with_baud(baud);
        self.platform.uart_configure(&config);
        self.baud.store(baud, Ordering::Relaxed);
        self.platform.enable_receive_interrupt();
        debug!("console: uart configured, {} baud 8N1", baud);
    }

    /// Switch to a different baud rate, keeping the rest of the line settings.
    /// A rate of 0 is ignored.
    pub fn set_baud(&self, baud: u32) {
        if baud == 0 {
            warn!("console: ignoring baud rate 0");
            return;
        }
        self.platform.uart_set_baud(baud);
        self.baud.store(baud, Ordering::Relaxed);
        info!("console: baud rate now {}", baud);
    }

    /// Last configured baud rate, 0 before setup
    pub fn baud(&self) -> u32 {
        self.baud.load(Ordering::Relaxed)
    }

    /// Bytes received but not yet consumed
    pub fn rx_pending(&self) -> usize {
        self.rx.len()
    }
}
