//! Line-oriented prompting over any `BufRead`.
//!
//! End of input is reported as `Ok(None)` so the session can shut down
//! cleanly when stdin closes or a scripted input runs out.

use std::io::{self, BufRead, Write};

use crate::render::Renderer;

/// Print `prompt` and read one line with only the line terminator removed.
pub fn read_raw<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Print `prompt` and read one trimmed line.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    Ok(read_raw(input, output, prompt)?.map(|line| line.trim().to_string()))
}

/// Keep prompting until `parse` accepts the line, printing each rejection.
pub fn ask<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    renderer: &Renderer,
    prompt: &str,
    parse: F,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let Some(line) = read_line(input, output, prompt)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(message) => write!(output, "{}", renderer.error(&message))?,
        }
    }
}

/// Yes/no question. Only `y` or `yes` count as yes.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<bool> {
    Ok(read_line(input, output, prompt)?
        .map(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false))
}
