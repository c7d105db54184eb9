#![no_std]
#![no_main]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::{
    clock::CpuClock,
    timer::systimer::SystemTimer,
    uart::{Config as UartConfig, Uart},
};
use panic_rtt_target as _;
use serial_debugger::{debug, debugln, debugln_to, install, DefmtSink, Debugger, SerialSink};

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

/// Baud rate of the debug UART.
const BAUD_RATE: u32 = 115_200;

/// Status codes reported over the debug port.
#[derive(Clone, Copy)]
enum Status {
    Connecting,
    Idle,
    Drawing { strokes: u32 },
}

impl Status {
    fn next(self, tick: u32) -> Self {
        match self {
            Status::Connecting if tick >= 3 => Status::Idle,
            Status::Idle if tick % 5 == 0 => Status::Drawing { strokes: 0 },
            Status::Drawing { strokes } if strokes >= 4 => Status::Idle,
            Status::Drawing { strokes } => Status::Drawing {
                strokes: strokes + 1,
            },
            other => other,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Connecting => write!(f, "CONNECTING"),
            Status::Idle => write!(f, "IDLE"),
            Status::Drawing { strokes } => write!(f, "DRAWING ({} strokes)", strokes),
        }
    }
}

/// Bytes currently allocated on the heap.
fn heap_report() -> usize {
    esp_alloc::HEAP.used()
}

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Allocate heap
    esp_alloc::heap_allocator!(size: 16 * 1024);

    let timer0 = SystemTimer::new(peripherals.SYSTIMER);
    esp_hal_embassy::init(timer0.alarm0);

    rtt_target::rtt_init_defmt!();

    info!(
        "Debug demo starting (debug output {})",
        if serial_debugger::is_enabled() { "on" } else { "off" }
    );

    // UART0 stands in for the Arduino `Serial` port: opened once, before any
    // debug call, at a fixed baud rate.
    let uart = Uart::new(peripherals.UART0, UartConfig::default().with_baudrate(BAUD_RATE))
        .unwrap_or_else(|_| defmt::panic!("failed to configure UART0"))
        .with_tx(peripherals.GPIO16)
        .with_rx(peripherals.GPIO17);
    let mut serial = Debugger::new(SerialSink::new(uart));

    // The global macros go to RTT.
    if install(Box::leak(Box::new(DefmtSink::new()))).is_err() {
        defmt::warn!("debug sink already installed");
    }

    serial.debugln("ready");
    debugln!("ready");

    let mut status = Status::Connecting;
    let mut tick: u32 = 0;
    loop {
        tick = tick.wrapping_add(1);
        status = status.next(tick);

        serial.debug("status: ");
        serial.debugln(status);

        // Skipped entirely, heap query included, when debug is compiled out.
        debugln_to!(serial.sink_mut(), heap_report());

        debug!("tick ");
        debugln!(tick);

        Timer::after(Duration::from_secs(1)).await;
    }
}
