use super::traits::Led;
use embassy_stm32::gpio::Output;

/// Onboard LED (PC13 on the Blue Pill), wired active low.
pub struct GpioLed<'d> {
    pin: Output<'d>,
}

impl<'d> GpioLed<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> Led for GpioLed<'d> {
    fn on(&mut self) {
        self.pin.set_low();
    }

    fn off(&mut self) {
        self.pin.set_high();
    }
}
