#![no_std]
#![no_main]

use bsp::entry;
use defmt::*;
use defmt_rtt as _;
use panic_probe as _;

// Provide an alias for our BSP so we can switch targets quickly.
// Uncomment the BSP you included in Cargo.toml, the rest of the code does not need to change.
use rp_pico as bsp;

use bsp::hal::{
    self,
    clocks::{init_clocks_and_plls, Clock},
    fugit::RateExtU32,
    gpio::{FunctionI2C, FunctionUart, InOutPin, Pin, PullUp},
    pac,
    uart::{DataBits, StopBits, UartConfig, UartPeripheral},
    watchdog::Watchdog,
    Timer,
};
use comfort_monitor::adapters::{OledScreen, SerialConsole};
use comfort_monitor::config::{CONSOLE_BAUD, I2C_FREQ_KHZ, OLED_I2C_ADDR};
use comfort_monitor::sensors::DhtSensor;
use comfort_monitor::{Monitor, MonitorConfig};

#[entry]
fn main() -> ! {
    info!("Comfort monitor starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Log channel: UART0 on GPIO0 (TX) / GPIO1 (RX)
    let uart_pins = (
        pins.gpio0.into_function::<FunctionUart>(),
        pins.gpio1.into_function::<FunctionUart>(),
    );
    let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(CONSOLE_BAUD.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();

    // OLED on I2C0: GPIO4 (SDA) / GPIO5 (SCL)
    let sda_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio4.reconfigure();
    let scl_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio5.reconfigure();
    let i2c = hal::I2C::i2c0(
        pac.I2C0,
        sda_pin,
        scl_pin,
        I2C_FREQ_KHZ.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    // DHT22 data line on GPIO2, open drain with pull-up
    let dht_pin = InOutPin::new(pins.gpio2.into_pull_up_input());

    let mut monitor = Monitor::new(
        OledScreen::new(i2c, OLED_I2C_ADDR),
        DhtSensor::new(dht_pin, timer),
        SerialConsole::new(uart),
        timer,
        MonitorConfig::default(),
    );

    if let Err(error) = monitor.start() {
        error!("Startup failed: {}", error);
        if error.is_fatal() {
            halt();
        }
    }

    info!(
        "Comfort monitor ready, sampling every {} ms",
        monitor.config().reading_interval_ms
    );
    monitor.run()
}

/// Stops here for good; no interrupts are enabled so the core sleeps forever
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
