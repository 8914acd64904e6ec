//! Terminal preview of styled runs via `termcolor`.

use std::io;

use termcolor::WriteColor;

use crate::style::StyledRun;

/// Writes styled runs to a [`WriteColor`] implementation, such as
/// [`StandardStream`](termcolor::StandardStream) or [`Buffer`](termcolor::Buffer).
/// The color spec is reset after each styled run.
///
/// # Errors
///
/// Propagates I/O errors returned by the `writer`.
///
/// # Examples
///
/// ```
/// use ansi_block::{write_runs, StyledText};
/// use termcolor::Buffer;
///
/// let text = StyledText::from_ansi("\u{1b}[31mhi\u{1b}[0m there");
/// let mut buffer = Buffer::no_color();
/// write_runs(&mut buffer, text.runs())?;
/// assert_eq!(buffer.as_slice(), b"hi there");
/// # Ok::<_, std::io::Error>(())
/// ```
pub fn write_runs<W: WriteColor + ?Sized>(writer: &mut W, runs: &[StyledRun]) -> io::Result<()> {
    for run in runs {
        if run.style.is_none() {
            writer.write_all(run.text.as_bytes())?;
        } else {
            writer.set_color(&run.style.to_color_spec())?;
            writer.write_all(run.text.as_bytes())?;
            writer.reset()?;
        }
    }
    Ok(())
}
