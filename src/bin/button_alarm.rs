//! STM32 Blue Pill Button Alarm
//! =============================================================================================
//!
//! This firmware samples a push button on one periodic task and drives
//! feedback outputs from a second periodic task. The two tasks hand samples
//! over through a shared 10-slot ring guarded by a single mutex:
//! 1. Sampler task: reads the button every millisecond, records the level
//!    into the ring and flashes the LED (5 x 100ms pulses) on a press
//! 2. Feedback task: drains the ring every millisecond and pulses the
//!    buzzer for 10ms whenever it reads a pressed sample
//! 3. Main loop: periodic status report with the current ring cursors
//!
//! Hardware Connections:
//!   - Onboard LED: PC13 (active low, no external connection needed)
//!   - Button: PC14 (connect to ground when pressed, internal pull-up)
//!   - Buzzer: PA0 (active high, via driver transistor)
//!
//! Expected Behavior:
//!   - Pressing the button flashes the LED and shortly after beeps the buzzer
//!   - Button transitions and system status are logged via defmt RTT

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod app {
    use button_alarm::buffer::SampleRing;
    use button_alarm::fault;
    use button_alarm::hardware::gpio_button::GpioButton;
    use button_alarm::hardware::gpio_buzzer::GpioBuzzer;
    use button_alarm::hardware::gpio_led::GpioLed;
    use button_alarm::tasks::{self, ButtonSample, SampleExchange};
    use embassy_executor::Spawner;
    use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
    use embassy_sync::mutex::Mutex;
    use embassy_time::Timer;
    use static_cell::StaticCell;
    use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

    // The shared ring lives for the whole process; it is created once here
    // and handed to both tasks by reference rather than touched as a global.
    static SAMPLES: StaticCell<SampleExchange> = StaticCell::new();

    /// Main application entry point
    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        // Default configuration runs the core from the internal HSI
        // oscillator, matching the board's clock setup
        let p = embassy_stm32::init(Default::default());

        defmt::info!("button alarm starting");

        // Button input with internal pull-up (reads low while pressed)
        let button = GpioButton::new(Input::new(p.PC14, Pull::Up));

        // Onboard LED is active low: initial High keeps it off
        let led = GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low));

        // Buzzer idles low (silent)
        let buzzer = GpioBuzzer::new(Output::new(p.PA0, Level::Low, Speed::Low));

        // Every slot starts at the idle sentinel, both cursors at 0
        let exchange: &'static SampleExchange =
            SAMPLES.init(Mutex::new(SampleRing::new(ButtonSample::Released)));

        // A failed spawn means the system never reaches its steady state;
        // park the core instead of running half the tasks
        if spawner.spawn(sampler(exchange, button, led)).is_err() {
            defmt::error!("failed to spawn sampler task");
            fault::halt();
        }
        if spawner.spawn(feedback(exchange, buzzer)).is_err() {
            defmt::error!("failed to spawn feedback task");
            fault::halt();
        }

        // Main status loop - reports ring cursor positions
        loop {
            Timer::after_secs(5).await;
            if let Ok(ring) = exchange.try_lock() {
                defmt::info!(
                    "status: write cursor {}, read cursor {}",
                    ring.write_cursor(),
                    ring.read_cursor()
                );
            }
        }
    }

    /// Button Sampling Task (producer)
    ///
    /// Responsibilities:
    /// 1. Sample the button level once per period
    /// 2. Record every sample into the shared ring under the lock
    /// 3. Flash the LED while a press is being recorded
    /// 4. Log press/release transitions
    #[embassy_executor::task]
    async fn sampler(
        exchange: &'static SampleExchange,
        button: GpioButton<'static>,
        mut led: GpioLed<'static>,
    ) {
        let mut last = ButtonSample::Released;

        loop {
            let sample = tasks::sample_once(exchange, &button, &mut led).await;
            if sample != last {
                defmt::info!("button {}", sample);
                last = sample;
            }

            // Cooperative yield before the next sample
            Timer::after(tasks::TASK_PERIOD).await;
        }
    }

    /// Feedback Task (consumer)
    ///
    /// Responsibilities:
    /// 1. Drain one slot from the shared ring per period
    /// 2. Pulse the buzzer when the drained sample is a press
    #[embassy_executor::task]
    async fn feedback(exchange: &'static SampleExchange, mut buzzer: GpioBuzzer<'static>) {
        loop {
            let sample = tasks::drain_once(exchange, &mut buzzer).await;
            if sample == ButtonSample::Pressed {
                defmt::info!("press drained, buzzer pulsed");
            }

            // Cooperative yield before the next drain
            Timer::after(tasks::TASK_PERIOD).await;
        }
    }
}

// The firmware only targets the MCU; host builds (unit tests) compile this
// binary down to an empty stub.
#[cfg(not(target_os = "none"))]
fn main() {}
