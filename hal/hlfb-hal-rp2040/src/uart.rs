//! Serial adapters
//!
//! Bridge any blocking `embedded-io` UART half (such as the halves of an
//! `embassy-rp` buffered UART) to the `hlfb-hal` serial traits.

use embedded_io::{Read, ReadReady, Write};
use hlfb_hal::{UartRx, UartTx};

/// Receive half
pub struct SerialRx<R> {
    rx: R,
}

impl<R: Read + ReadReady> SerialRx<R> {
    /// Wrap a receiver
    pub fn new(rx: R) -> Self {
        Self { rx }
    }
}

impl<R: Read + ReadReady> UartRx for SerialRx<R> {
    type Error = R::Error;

    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        self.rx.read_ready()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        // read_ready() was true, so this returns at least one byte at once
        self.rx.read(&mut buf)?;
        Ok(buf[0])
    }
}

/// Transmit half
pub struct SerialTx<T> {
    tx: T,
}

impl<T: Write> SerialTx<T> {
    /// Wrap a transmitter
    pub fn new(tx: T) -> Self {
        Self { tx }
    }
}

impl<T: Write> UartTx for SerialTx<T> {
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.flush()
    }
}
