//! Blocking confirmation alerts.

use std::io::{self, BufRead, Write};

/// Alert text shown after a successful stock update.
pub const STOCK_UPDATED: &str = "Stock updated";
/// Alert text shown after a successful order.
pub const ORDER_PLACED: &str = "Order placed";

/// Shows a message and returns only once the user has acknowledged it.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Prints the alert to stdout and waits for Enter on stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        let stdin = io::stdin();
        acknowledge(&mut io::stdout(), &mut stdin.lock(), message);
    }
}

/// Write the alert, then block until one line of input (or end of input).
/// I/O failures are logged; the alert never fails the caller.
fn acknowledge(out: &mut impl Write, input: &mut impl BufRead, message: &str) {
    if let Err(err) = write!(out, "\n*** {message} ***\nPress Enter to continue...")
        .and_then(|()| out.flush())
    {
        tracing::warn!(error = %err, "failed to show alert");
    }

    let mut ack = String::new();
    if let Err(err) = input.read_line(&mut ack) {
        tracing::warn!(error = %err, "failed to read alert acknowledgement");
    }
}
