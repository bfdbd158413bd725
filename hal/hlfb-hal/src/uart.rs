//! UART serial communication abstractions
//!
//! Provides traits for byte-oriented serial communication that can be
//! implemented by chip-specific HALs.

use core::fmt;

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
///
/// Reads never wait for data: callers check [`UartRx::read_ready`] first.
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Check whether at least one byte can be read without blocking
    fn read_ready(&mut self) -> Result<bool, Self::Error>;

    /// Read a single byte that [`UartRx::read_ready`] reported as available
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self { baudrate: 115200 }
    }
}

/// Text adapter over a [`UartTx`]
///
/// Implements [`core::fmt::Write`] so callers can `write!` directly to the
/// serial port. The underlying error is kept until [`TextWriter::take_error`].
pub struct TextWriter<T: UartTx> {
    tx: T,
    error: Option<T::Error>,
}

impl<T: UartTx> TextWriter<T> {
    /// Wrap a transmitter
    pub fn new(tx: T) -> Self {
        Self { tx, error: None }
    }

    /// Take the first transmit error seen since the last call
    pub fn take_error(&mut self) -> Option<T::Error> {
        self.error.take()
    }

    /// Get access to the underlying transmitter
    pub fn inner(&self) -> &T {
        &self.tx
    }

    /// Flush the underlying transmitter
    pub fn flush(&mut self) -> Result<(), T::Error> {
        self.tx.flush()
    }
}

impl<T: UartTx> fmt::Write for TextWriter<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.tx.write_blocking(s.as_bytes()) {
            Ok(()) => Ok(()),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
                Err(fmt::Error)
            }
        }
    }
}
