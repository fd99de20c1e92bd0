//! Encoder Deck Firmware - Main Entry Point
//!
//! Hardware-only entry point for the STM32F401CC black pill.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_futures::yield_now;
use embassy_stm32::gpio::{AnyPin, Input, Level, Output, Pin as GpioPin, Pull, Speed};
use embassy_stm32::{bind_interrupts, peripherals, usb_otg};
use embassy_time::Timer;
use embassy_usb::class::hid::{self, HidWriter};
use embassy_usb::Builder;
use static_cell::StaticCell;
use usbd_hid::descriptor::{KeyboardReport, SerializedDescriptor};

use firmware::{
    board::PinLabel, boot, HidKeyboard, QuadratureEncoder, ACTIVE_LAYOUT, BLACK_PILL,
    BUTTON_COUNT, CONTROL_COUNT, ENCODER_COUNT,
};
use input::{AnySource, Registry, Thresholds};
use platform::{config, ActiveLevel, EmbassyClock, PinState};

use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    OTG_FS => usb_otg::InterruptHandler<peripherals::USB_OTG_FS>;
});

type Pin = Input<'static, AnyPin>;
type Encoder = QuadratureEncoder<Pin, Pin, Pin>;

/// Boot keyboard report: modifier + reserved + 6 keys.
const REPORT_LEN: usize = 8;

static EP_OUT_BUFFER: StaticCell<[u8; 256]> = StaticCell::new();
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static HID_STATE: StaticCell<hid::State<'static>> = StaticCell::new();

fn pull_for(level: ActiveLevel) -> Pull {
    match level {
        ActiveLevel::Low => Pull::Up,
        ActiveLevel::High => Pull::Down,
    }
}

fn level_of(state: PinState) -> Level {
    match state {
        PinState::High => Level::High,
        PinState::Low => Level::Low,
    }
}

/// Drive an encoder supply pin, if the profile wires one.
fn supply<T: GpioPin>(wired: Option<PinLabel>, pin: T, level: Level) -> Option<Output<'static, AnyPin>> {
    wired.map(|_| Output::new(pin, level, Speed::Low).degrade())
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(boot::hardware::build_embassy_config());
    let board = BLACK_PILL;

    defmt::info!(
        "{=str} v{=str} on {=str}",
        config::APP_NAME,
        config::APP_VERSION,
        board.name
    );
    for step in boot::BOOT_SEQUENCE_STEPS {
        defmt::debug!("boot: {=str}", step);
    }

    for pin in board.pins() {
        defmt::debug!("claim {=str}", pin);
    }

    // Step 1: LED on
    let mut led = board
        .led
        .map(|_| Output::new(p.PC13, level_of(board.led_state(true)), Speed::Low));

    // Step 2: encoder power. The outputs are held for the lifetime of main;
    // dropping one would float the encoder's supply.
    let [enc1, enc2, enc3, enc4] = board.encoders;
    let _encoder_power: [Option<Output<'static, AnyPin>>; 8] = [
        supply(enc1.gnd, p.PA10, Level::Low),
        supply(enc1.vcc, p.PA9, Level::High),
        supply(enc2.gnd, p.PA4, Level::Low),
        supply(enc2.vcc, p.PA3, Level::High),
        supply(enc3.gnd, p.PB9, Level::Low),
        supply(enc3.vcc, p.PB10, Level::High),
        supply(enc4.gnd, p.PB3, Level::Low),
        supply(enc4.vcc, p.PB4, Level::High),
    ];

    // Step 3: inputs
    let enc_pull = pull_for(board.encoder_level);
    let encoder = |a: Pin, b: Pin, sw: Pin| QuadratureEncoder::new(a, b, sw, board.encoder_level);
    let encoders: [Encoder; ENCODER_COUNT] = [
        encoder(
            Input::new(p.PA7, enc_pull).degrade(),
            Input::new(p.PA6, enc_pull).degrade(),
            Input::new(p.PA8, enc_pull).degrade(),
        ),
        encoder(
            Input::new(p.PA1, enc_pull).degrade(),
            Input::new(p.PA0, enc_pull).degrade(),
            Input::new(p.PA2, enc_pull).degrade(),
        ),
        encoder(
            Input::new(p.PB13, enc_pull).degrade(),
            Input::new(p.PB14, enc_pull).degrade(),
            Input::new(p.PB12, enc_pull).degrade(),
        ),
        encoder(
            Input::new(p.PB6, enc_pull).degrade(),
            Input::new(p.PB7, enc_pull).degrade(),
            Input::new(p.PB5, enc_pull).degrade(),
        ),
    ];

    // PA13/PA14 double as SWDIO/SWCLK: RTT output stops once they are inputs.
    let btn_pull = pull_for(board.button_level);
    let buttons: [Pin; BUTTON_COUNT] = [
        Input::new(p.PA15, btn_pull).degrade(),
        Input::new(p.PA14, btn_pull).degrade(),
        Input::new(p.PA13, btn_pull).degrade(),
        Input::new(p.PB0, btn_pull).degrade(),
    ];

    // Step 4: polarity strap, read once
    let strap = board
        .polarity_select
        .map(|_| PinState::from(Input::new(p.PB2, Pull::None).is_high()));
    let polarity = boot::resolve_polarity(board.default_invert, strap);
    defmt::info!("layout={=str} polarity={}", ACTIVE_LAYOUT.name(), polarity);

    let mut registry: Registry<AnySource<Pin, Encoder>, CONTROL_COUNT> =
        Registry::new(Thresholds::DEFAULT);
    if let Err(e) =
        ACTIVE_LAYOUT.populate(&mut registry, encoders, buttons, polarity, board.button_level)
    {
        defmt::error!("control registration failed: {}", e);
    }
    defmt::info!("{=usize} controls registered", registry.len());

    // Step 5: USB warm-up
    Timer::after_millis(boot::USB_WARMUP_MS).await;

    // Step 6: USB HID keyboard
    let mut otg_config = usb_otg::Config::default();
    // PA9 (VBUS sense) powers encoder 1 on this board.
    otg_config.vbus_detection = false;
    let driver = usb_otg::Driver::new_fs(
        p.USB_OTG_FS,
        Irqs,
        p.PA12,
        p.PA11,
        EP_OUT_BUFFER.init([0; 256]),
        otg_config,
    );

    let mut usb_config = embassy_usb::Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL);
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        usb_config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        MSOS_DESCRIPTOR.init([0; 256]),
        CONTROL_BUF.init([0; 64]),
    );
    let hid_config = hid::Config {
        report_descriptor: KeyboardReport::desc(),
        request_handler: None,
        poll_ms: config::HID_POLL_MS,
        max_packet_size: 8,
    };
    let writer =
        HidWriter::<_, REPORT_LEN>::new(&mut builder, HID_STATE.init(hid::State::new()), hid_config);
    let mut usb = builder.build();
    let mut keyboard = HidKeyboard::new(writer);

    let app = async {
        // Step 7: settle
        Timer::after_millis(boot::POST_USB_SETTLE_MS).await;
        keyboard.writer_mut().ready().await;

        // Step 8: LED off, poll forever
        if let Some(led) = led.as_mut() {
            led.set_level(level_of(board.led_state(false)));
        }
        defmt::info!("entering polling loop");

        let clock = EmbassyClock;
        loop {
            registry.sweep(&clock, &mut keyboard).await;
            yield_now().await;
        }
    };

    join(usb.run(), app).await;
}
