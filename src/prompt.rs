//! Interactive line prompts for mode selection.

use crate::Result;
use std::io::{BufRead, Write};

/// Print `question` without a newline and read one trimmed line of input.
///
/// End of input yields an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
