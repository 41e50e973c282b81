//! Blink tool
//!
//! Asks for a blink rate on the serial console, then toggles the two user
//! LEDs at that rate. ^C on the console restarts the board at any time.

#![no_std]
#![no_main]

mod board;

use cortex_m_rt::entry;
use disco_console::{eprintln, print, println};
use log::{info, LevelFilter};
use panic_halt as _;
use stm32f7xx_hal::{
    pac::{self, interrupt},
    prelude::*,
    rcc::{HSEClock, HSEClockMode},
};

use crate::board::Usart1Port;

const CONSOLE_BAUD: u32 = 115_200;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().expect("device peripherals taken twice");
    let cp = cortex_m::Peripherals::take().expect("core peripherals taken twice");

    board::enable_usart1_clock(&dp.RCC);
    let rcc = dp.RCC.constrain();
    let clocks = rcc
        .cfgr
        .hse(HSEClock::new(25_000_000.Hz(), HSEClockMode::Oscillator))
        .sysclk(216_000_000.Hz())
        .freeze();
    let mut delay = cp.SYST.delay(&clocks);

    let gpioa = dp.GPIOA.split();
    let _tx = gpioa.pa9.into_alternate::<7>();
    let _rx = gpioa.pa10.into_alternate::<7>();

    let port: &'static Usart1Port =
        cortex_m::singleton!(: Usart1Port = Usart1Port::new(clocks.pclk2().raw()))
            .expect("console port created twice");
    disco_console::init(port, CONSOLE_BAUD).expect("console initialized twice");
    if disco_console::init_logger(LevelFilter::Info).is_err() {
        eprintln!("logger already installed");
    }
    info!("sysclk {} Hz", clocks.sysclk().raw());

    let gpioj = dp.GPIOJ.split();
    let mut led1 = gpioj.pj13.into_push_pull_output();
    let mut led2 = gpioj.pj5.into_push_pull_output();
    led2.set_low();
    led1.set_high();

    println!("\nBlink tool. press ^C to restart at any time.");
    let mut line = [0u8; 128];
    loop {
        print!("Enter blink rate (in Hz): ");
        let len = read_line(&mut line);
        let rate = parse_rate(&line[..len]);
        if rate < 0.000005 {
            println!("Enter a blink rate in Hertz");
            continue;
        }

        let period_ms = (1000.0 / rate) as u32;
        println!("\nBlinking at {} Hz ... ", 1000.0 / period_ms as f32);
        loop {
            led1.toggle();
            led2.toggle();
            delay.delay_ms(period_ms);
        }
    }
}

/// Collect stdin pieces until a newline or a full buffer, like `fgets`
fn read_line(buf: &mut [u8]) -> usize {
    let mut len = 0;
    while len < buf.len() {
        match disco_console::read(0, &mut buf[len..]) {
            Ok(n) => len += n,
            Err(_) => break,
        }
        if buf[..len].ends_with(b"\n") {
            break;
        }
    }
    len
}

/// Leading decimal number of `line`, 0.0 if there is none
fn parse_rate(line: &[u8]) -> f32 {
    core::str::from_utf8(line)
        .ok()
        .and_then(|s| s.trim().parse::<f32>().ok())
        .unwrap_or(0.0)
}

#[interrupt]
fn USART1() {
    disco_console::on_rx_interrupt();
}
