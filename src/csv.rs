// src/csv.rs
use std::io::{self, Write};

pub const DELIM: char = ',';
const EOL: &str = "\r\n";

fn needs_quotes(field: &str) -> bool {
    field.contains(DELIM) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one comma-separated row, CRLF-terminated.
/// Cells holding the delimiter, a quote or a line break are quoted; embedded
/// quotes are doubled.
pub fn write_row<W, I, S>(mut w: W, cells: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in cells {
        let cell = cell.as_ref();
        if !first { write!(w, "{DELIM}")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(EOL.as_bytes())
}
