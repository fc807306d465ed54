//! Byte-stream port the interactive loop runs over
//!
//! The loop only needs what a bare UART offers: blocking single-byte reads
//! and writes plus three status flags. [`StdioPort`] provides the same
//! interface over the host's stdin and stdout.

use std::io::{self, Read, Stdin, Stdout, Write};

/// End of transmission (Ctrl-D)
pub const EOT: u8 = 0x04;

/// Serial port interface
///
/// # Invariants
///
/// - `read_byte` blocks until a byte is available
/// - `write_byte` blocks until the byte has been accepted for transmission
///
/// The interactive loop blocks in `read_byte` and never polls `rx_ready`;
/// the flag is kept so a host driving the port from a main loop can check
/// for input without blocking.
pub trait SerialPort {
    /// Read one byte, waiting for it if necessary
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the port fails.
    fn read_byte(&mut self) -> io::Result<u8>;

    /// Write one byte, waiting for room in the transmitter if necessary
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the port fails.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    /// Whether `write_byte` would accept a byte without waiting
    fn tx_ready(&self) -> bool;

    /// Whether `read_byte` would return without waiting
    fn rx_ready(&self) -> bool;

    /// Whether every written byte has left the transmitter
    fn tx_complete(&self) -> bool;

    /// Write every byte of `s`, waiting for the transmitter before each one
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        s.bytes().try_for_each(|b| {
            while !self.tx_ready() {
                std::hint::spin_loop();
            }
            self.write_byte(b)
        })
    }
}

/// [`SerialPort`] over the process's stdin and stdout
///
/// End of input reads as [`EOT`]. Every byte is flushed as it is written, so
/// prompts and echoes appear immediately.
pub struct StdioPort {
    input: Stdin,
    output: Stdout,
}

impl StdioPort {
    /// Port on the standard streams
    pub fn new() -> Self {
        Self {
            input: io::stdin(),
            output: io::stdout(),
        }
    }
}

impl Default for StdioPort {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialPort for StdioPort {
    fn read_byte(&mut self) -> io::Result<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.lock().read(&mut byte) {
                Ok(0) => return Ok(EOT),
                Ok(_) => return Ok(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        let mut out = self.output.lock();
        out.write_all(&[byte])?;
        out.flush()
    }

    fn tx_ready(&self) -> bool {
        true
    }

    fn rx_ready(&self) -> bool {
        true
    }

    fn tx_complete(&self) -> bool {
        true
    }
}
