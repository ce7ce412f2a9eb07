// src/report.rs

use crate::engine::CascadeDistances;
use std::io;

/// Space-separated distances, no trailing whitespace.
pub fn render_line(distances: &[u64]) -> String {
    distances
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Right line then left line, each newline-terminated.
pub fn render(distances: &CascadeDistances) -> String {
    let mut out = render_line(&distances.right);
    out.push('\n');
    out.push_str(&render_line(&distances.left));
    out.push('\n');
    out
}

pub fn write_report<W: io::Write>(writer: &mut W, distances: &CascadeDistances) -> io::Result<()> {
    writeln!(writer, "{}", render_line(&distances.right))?;
    writeln!(writer, "{}", render_line(&distances.left))?;
    Ok(())
}
