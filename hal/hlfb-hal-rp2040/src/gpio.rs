//! GPIO wrappers
//!
//! Newtypes over `embassy-rp` pins that implement the `hlfb-hal` traits.

use embassy_rp::gpio::{AnyPin, Input, Level as RpLevel, Output, Pull};
use embassy_rp::Peri;
use hlfb_hal::{InputPin, OutputPin, TimedInput};

use crate::clock::EmbassyClock;

/// HLFB input: pulled-up GPIO with pulse timing
pub type HlfbInput = TimedInput<RpInput, EmbassyClock>;

/// Configure `pin` as an HLFB input
///
/// HLFB outputs are open-drain, so the input needs the internal pull-up.
pub fn hlfb_input(pin: Peri<'static, AnyPin>) -> HlfbInput {
    TimedInput::new(RpInput::new(pin, Pull::Up), EmbassyClock)
}

/// Digital input
pub struct RpInput {
    pin: Input<'static>,
}

impl RpInput {
    /// Configure `pin` as an input with the given pull
    pub fn new(pin: Peri<'static, AnyPin>, pull: Pull) -> Self {
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Digital push-pull output
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, RpLevel::Low),
        }
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
