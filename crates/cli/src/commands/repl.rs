//! Interactive evaluation loop over a serial port
//!
//! Prompts with `args> `, reads a line of at most 15 characters, evaluates the
//! selected operation on the one or two integers it contains and prints the
//! result. Backspace (or DEL, which many terminal programs send instead)
//! erases, EOT (Ctrl-D) ends the session.

use anyhow::{ensure, Context, Result};
use s16math::Scale;
use std::io;

use super::eval::{evaluate, Op, Outcome};
use crate::serial::{SerialPort, StdioPort, EOT};

const PROMPT: &str = "args> ";
const EOL: &str = "\r\n";
const BS: u8 = 0x08;
const DEL: u8 = 0x7f;

/// Size of the line buffer, terminator included
pub const LINE_CAPACITY: usize = 16;

/// What one call to [`LineEditor::read_line`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// A complete line, terminator removed
    Text(String),
    /// The line did not fit; its contents were dropped
    TooLong,
    /// EOT, with whatever preceded it on the line
    End(String),
}

/// Echoing line reader with a fixed buffer
struct LineEditor {
    buf: [u8; LINE_CAPACITY],
    len: usize,
    // swallow the LF of a CR LF pair
    after_cr: bool,
}

impl LineEditor {
    fn new() -> Self {
        Self {
            buf: [0; LINE_CAPACITY],
            len: 0,
            after_cr: false,
        }
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.buf[..self.len]).into_owned()
    }

    fn read_line<P: SerialPort>(&mut self, port: &mut P) -> io::Result<Line> {
        self.len = 0;
        let mut overfull = false;
        loop {
            let byte = port.read_byte()?;
            let after_cr = std::mem::replace(&mut self.after_cr, byte == b'\r');
            match byte {
                b'\n' if after_cr => {}
                EOT => {
                    port.write_str(EOL)?;
                    if overfull {
                        self.len = 0;
                    }
                    return Ok(Line::End(self.text()));
                }
                BS | DEL => {
                    if self.len > 0 && !overfull {
                        self.len -= 1;
                        port.write_str("\x08 \x08")?;
                    }
                }
                b'\r' | b'\n' => {
                    if overfull {
                        return Ok(Line::TooLong);
                    }
                    port.write_str(EOL)?;
                    return Ok(Line::Text(self.text()));
                }
                _ if overfull => {}
                _ => {
                    port.write_byte(byte)?;
                    if self.len == LINE_CAPACITY - 1 {
                        overfull = true;
                        port.write_str(" too long")?;
                        port.write_str(EOL)?;
                    } else {
                        self.buf[self.len] = byte;
                        self.len += 1;
                    }
                }
            }
        }
    }
}

/// Parse the operands on `text` and evaluate; `None` for a blank line
fn answer<S: Scale>(op: Op, text: &str) -> Result<Option<Outcome>> {
    let mut operands = text.split_ascii_whitespace().map(|token| {
        token
            .parse::<i16>()
            .with_context(|| format!("`{}` is not a 16-bit integer", token))
    });
    let Some(a) = operands.next().transpose()? else {
        return Ok(None);
    };
    let b = operands.next().transpose()?;
    ensure!(operands.next().is_none(), "too many operands");
    evaluate::<S>(op, a, b).map(Some)
}

fn respond<S: Scale, P: SerialPort>(
    port: &mut P,
    op: Op,
    text: &str,
    show_time: bool,
) -> io::Result<()> {
    match answer::<S>(op, text) {
        Ok(None) => Ok(()),
        Ok(Some(outcome)) => {
            port.write_str(&outcome.line(show_time))?;
            port.write_str(EOL)?;
            if outcome.overflow {
                port.write_str("overflow")?;
                port.write_str(EOL)?;
            }
            Ok(())
        }
        Err(e) => {
            port.write_str(&format!("error: {:#}", e))?;
            port.write_str(EOL)
        }
    }
}

/// Run the loop on `port` until EOT
///
/// # Errors
///
/// Only port failures end the loop early; bad input is reported on the port
/// and the loop carries on.
pub fn run<S: Scale, P: SerialPort>(port: &mut P, op: Op, show_time: bool) -> io::Result<()> {
    let mut editor = LineEditor::new();
    loop {
        port.write_str(PROMPT)?;
        while !port.tx_complete() {
            std::hint::spin_loop();
        }
        match editor.read_line(port)? {
            Line::TooLong => {}
            Line::Text(text) => respond::<S, P>(port, op, &text, show_time)?,
            Line::End(text) => {
                respond::<S, P>(port, op, &text, show_time)?;
                return Ok(());
            }
        }
    }
}

/// Run the loop on stdin and stdout
pub fn execute<S: Scale>(op: Op, show_time: bool) -> Result<()> {
    let mut port = StdioPort::new();
    run::<S, _>(&mut port, op, show_time).context("console I/O failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serial::mock::MockPort;
    use s16math::Decimal;

    fn session(op: Op, script: &[u8]) -> String {
        let mut port = MockPort::new(script);
        run::<Decimal, _>(&mut port, op, false).unwrap();
        port.written()
    }

    #[test]
    fn test_multiply_session() {
        let out = session(Op::Mul, b"1200 300\n\x04");
        assert_eq!(out, "args> 1200 300\r\n12.00*3.00=36.00\r\nargs> \r\n");
    }

    #[test]
    fn test_overflow_is_reported() {
        let out = session(Op::Mul, b"20000 20000\r\x04");
        assert!(out.contains("\r\noverflow\r\n"));
    }

    #[test]
    fn test_crlf_counts_as_one_line_end() {
        let out = session(Op::Mul, b"1200 300\r\n\x04");
        assert_eq!(out.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_backspace_and_del_erase() {
        let out = session(Op::Mul, b"12x\x7f00 3009\x08\n\x04");
        assert!(out.contains("\x08 \x08"));
        assert!(out.contains("12.00*3.00=36.00"));
    }

    #[test]
    fn test_erase_on_empty_line_is_ignored() {
        let out = session(Op::Mul, b"\x7f\x04");
        assert_eq!(out, "args> \r\n");
    }

    #[test]
    fn test_line_capacity() {
        // fifteen characters fit
        let out = session(Op::Mul, b"1200        300\n\x04");
        assert!(out.contains("12.00*3.00=36.00"));

        // sixteen do not, and the rest of the line is dropped
        let out = session(Op::Mul, b"1200         300 1 2 3\n\x04");
        assert!(out.contains(" too long\r\n"));
        assert!(!out.contains('='));
        assert_eq!(out.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_bad_operands_are_reported() {
        let out = session(Op::Mul, b"abc 1\n1 2 3\n100\n\x04");
        assert!(out.contains("error: `abc` is not a 16-bit integer"));
        assert!(out.contains("error: too many operands"));
        assert!(out.contains("error: `mul` needs two operands"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let out = session(Op::Sqrt, b"\n   \n400\n\x04");
        assert_eq!(out.matches(PROMPT).count(), 4);
        assert!(out.contains("sqrt(4.00)=2.00"));
        assert!(!out.contains("error"));
    }

    #[test]
    fn test_eot_ends_after_pending_line() {
        let out = session(Op::Mul, b"1200 300\x04");
        assert!(out.contains("12.00*3.00=36.00"));
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let out = session(Op::Mul, b"1200 300\n");
        assert!(out.contains("36.00"));
    }
}
