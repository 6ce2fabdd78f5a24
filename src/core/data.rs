//! `x,y1,y2` CSV loader with zero-allocation number parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use crate::core::series::Sample;

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount(usize),
    BadInteger { field: &'static str, text: String },
    BadFloat { field: &'static str, text: String },
    NoRows,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount(n) => {
                write!(f, "line {}: expected 3 columns, got {}", self.line, n)
            }
            ParseErrorKind::BadInteger { field, text } => {
                write!(f, "line {}: invalid integer {} value '{}'", self.line, field, text)
            }
            ParseErrorKind::BadFloat { field, text } => {
                write!(f, "line {}: invalid {} value '{}'", self.line, field, text)
            }
            ParseErrorKind::NoRows => f.write_str("no data rows found"),
        }
    }
}

impl Error for ParseCsvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
fn trim(b: &[u8]) -> &[u8] {
    b.trim_ascii()
}

/// Rewrite U+2212 (`−`, three bytes in UTF-8) as ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if buf[r..].starts_with("\u{2212}".as_bytes()) {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_x(bytes: &[u8], line: usize) -> Result<i64, ParseCsvError> {
    lexical_core::parse::<i64>(bytes).map_err(|_| ParseCsvError {
        line,
        kind: ParseErrorKind::BadInteger {
            field: "x",
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })
}

#[inline]
fn parse_y(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseCsvError> {
    match lexical_core::parse::<f64>(bytes) {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadFloat {
                field,
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        }),
    }
}

// --- CSV ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read `x,y1,y2` rows. A non-numeric first row is taken as a header; blank
/// lines and `#` comments are skipped.
pub fn read_csv<R: Read>(src: R) -> Result<Vec<Sample>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(128);
    let mut data = Vec::<Sample>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let row = trim(&buf);
        if row.is_empty() || row[0] == b'#' {
            continue;
        }

        let cols: Vec<&[u8]> = row.split(|&b| b == b',').map(trim).collect();

        // header detection: first field of the first row is not a number
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(cols[0]).is_err() {
                continue;
            }
        }

        let [x, y1, y2] = cols[..] else {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount(cols.len()),
            });
        };

        data.push(Sample::new(
            parse_x(x, line_no)?,
            parse_y(y1, line_no, "y1")?,
            parse_y(y2, line_no, "y2")?,
        ));
    }

    if data.is_empty() {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::NoRows,
        });
    }
    log::debug!("read {} row(s) from {line_no} line(s)", data.len());
    Ok(data)
}

/// `-` reads stdin.
pub fn read_csv_from_path(path: &str) -> Result<Vec<Sample>, ParseCsvError> {
    if path == "-" {
        read_csv(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?;
        read_csv(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_with_header_and_comments() {
        let text = "x, first, second\n# note\n\n1, 2.5, 3\r\n2,−4,1e1\n";
        let rows = read_csv(text.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![Sample::new(1, 2.5, 3.0), Sample::new(2, -4.0, 10.0)]
        );
    }

    #[test]
    fn rejects_fractional_x() {
        let err = read_csv("1.5,2,3\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.kind, ParseErrorKind::BadInteger { .. }));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = read_csv("1,2,3\n2,3\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::BadColumnCount(2)));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = read_csv("1,NaN,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { field: "y1", .. }));
    }

    #[test]
    fn header_only_is_an_error() {
        let err = read_csv("x,y1,y2\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NoRows));
    }

    #[test]
    fn unicode_minus() {
        let mut b = "−1,−2".as_bytes().to_vec();
        normalize_unicode_minus(&mut b);
        assert_eq!(b, b"-1,-2");
    }
}
