//! Line-oriented stdin helpers for the interactive screens

use std::io::{self, Write};

/// Print a prompt and read one line, trimmed.
///
/// A closed stdin surfaces as `UnexpectedEof` so menu loops unwind
/// instead of spinning on empty reads.
pub fn line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(buf.trim().to_string())
}

/// Read a line, mapping empty input to None.
pub fn optional(prompt: &str) -> io::Result<Option<String>> {
    let value = line(prompt)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Read a numeric id, mapping empty or non-numeric input to None.
pub fn id(prompt: &str) -> io::Result<Option<i64>> {
    Ok(line(prompt)?.parse().ok())
}

/// Ask for confirmation. Anything but an explicit yes is a no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let answer = line(&format!("{} [y/N] ", prompt))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
