//! Pin allocation for config-driven board layouts
//!
//! Board pin numbers come from `board.toml`, so GPIOs are taken by number
//! at startup rather than by name. GPIO0/GPIO1 are held back for the
//! command UART and can never be handed out as monitor pins.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_0, PIN_1, UART0};
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// UART0 TX pin
pub const UART_TX_PIN: u8 = 0;
/// UART0 RX pin
pub const UART_RX_PIN: u8 = 1;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin reserved for the command UART
    Reserved,
}

/// Peripherals for the command UART
pub struct SerialPeripherals {
    pub uart: Peri<'static, UART0>,
    pub tx: Peri<'static, PIN_0>,
    pub rx: Peri<'static, PIN_1>,
}

/// Pin bank holding every non-UART GPIO, taken by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Split the peripherals into the command UART and a pin bank
    pub fn split(p: Peripherals) -> (Self, SerialPeripherals) {
        let serial = SerialPeripherals {
            uart: p.UART0,
            tx: p.PIN_0,
            rx: p.PIN_1,
        };
        let bank = Self {
            pins: [
                None,
                None,
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };
        (bank, serial)
    }

    /// Take a pin by number
    ///
    /// Returns the pin if available, or an error if:
    /// - Pin number is invalid (>= 30)
    /// - Pin belongs to the command UART
    /// - Pin was already taken
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num as usize >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        if is_reserved(pin_num) {
            return Err(PinError::Reserved);
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}

/// Whether `pin_num` belongs to the command UART
pub const fn is_reserved(pin_num: u8) -> bool {
    pin_num == UART_TX_PIN || pin_num == UART_RX_PIN
}
