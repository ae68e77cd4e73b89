//! Small terminal helpers.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::time::Duration;
use tracing::instrument;

/// Clears the screen and homes the cursor.
#[instrument(skip(out))]
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Flushes `out`, then sleeps for `secs` seconds.
pub fn pause<W: Write>(out: &mut W, secs: u64) -> io::Result<()> {
    out.flush()?;
    if secs > 0 {
        std::thread::sleep(Duration::from_secs(secs));
    }
    Ok(())
}
