use super::traits::Buzzer;
use embassy_stm32::gpio::Output;

/// Active-high buzzer on a push-pull output pin.
pub struct GpioBuzzer<'d> {
    pin: Output<'d>,
}

impl<'d> GpioBuzzer<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl<'d> Buzzer for GpioBuzzer<'d> {
    fn on(&mut self) {
        self.pin.set_high();
    }

    fn off(&mut self) {
        self.pin.set_low();
    }
}
