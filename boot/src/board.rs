//! USART1 on the STM32F769I-DISCO
//!
//! PA9/PA10 (AF7) are wired to the ST-LINK virtual COM port. USART1 runs
//! from PCLK2; the console reaches it only through [`Platform`].

use cortex_m::peripheral::{NVIC, SCB};
use disco_common::{FlowControl, Parity, SerialConfig, StopBits};
use disco_console::{Platform, UartStatus};
use stm32f7xx_hal::pac::{self, usart1, Interrupt, USART1};

pub struct Usart1Port {
    /// USART1 kernel clock in Hz
    pclk: u32,
}

impl Usart1Port {
    pub const fn new(pclk: u32) -> Self {
        Usart1Port { pclk }
    }

    fn regs(&self) -> &'static usart1::RegisterBlock {
        // SAFETY: the register block is always mapped; every access below is
        // a single volatile read or write of one register.
        unsafe { &*USART1::ptr() }
    }
}

impl Platform for Usart1Port {
    fn uart_status(&self) -> UartStatus {
        UartStatus::from_bits_truncate(self.regs().isr.read().bits())
    }

    fn uart_read_byte(&self) -> u8 {
        self.regs().rdr.read().bits() as u8
    }

    fn uart_write_byte(&self, byte: u8) {
        // SAFETY: TDR takes any 9-bit value
        self.regs().tdr.write(|w| unsafe { w.bits(u32::from(byte)) });
    }

    fn uart_configure(&self, config: &SerialConfig) {
        let usart = self.regs();
        usart.cr1.modify(|_, w| w.ue().clear_bit());

        self.uart_set_baud(config.baud);

        let stop = match config.stop_bits {
            StopBits::One => 0b00,
            StopBits::Two => 0b10,
        };
        // SAFETY: STOP is a 2-bit field, both values are valid encodings
        usart.cr2.write(|w| unsafe { w.stop().bits(stop) });

        let rts_cts = config.flow_control == FlowControl::RtsCts;
        usart.cr3.write(|w| w.rtse().bit(rts_cts).ctse().bit(rts_cts));

        // with parity on, the parity bit takes the 9th data bit slot
        let parity = config.parity != Parity::None;
        usart.cr1.write(|w| {
            w.m0()
                .bit(parity)
                .pce()
                .bit(parity)
                .ps()
                .bit(config.parity == Parity::Odd)
                .te()
                .set_bit()
                .re()
                .set_bit()
                .ue()
                .set_bit()
        });
    }

    fn uart_set_baud(&self, baud: u32) {
        if baud == 0 {
            return;
        }
        let brr = (self.pclk + baud / 2) / baud;
        // SAFETY: any 16-bit divider is accepted with OVER8 = 0
        self.regs().brr.write(|w| unsafe { w.bits(brr) });
    }

    fn enable_receive_interrupt(&self) {
        self.regs().cr1.modify(|_, w| w.rxneie().set_bit());
        // SAFETY: the USART1 vector is defined in main.rs
        unsafe { NVIC::unmask(Interrupt::USART1) };
    }

    fn clear_overrun(&self) {
        self.regs().icr.write(|w| w.orecf().set_bit());
    }

    fn system_reset(&self) -> ! {
        SCB::sys_reset()
    }
}

/// Gate the USART1 clock before the RCC is handed to the HAL
pub fn enable_usart1_clock(rcc: &pac::RCC) {
    rcc.apb2enr.modify(|_, w| w.usart1en().set_bit());
}
