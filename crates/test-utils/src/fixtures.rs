//! Common test fixtures for ingestion and end-to-end tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Well-formed delimited text: the unit square plus its centre.
pub const UNIT_SQUARE_CSV: &str = "X,Y,Value\n\
0,0,1\n\
1,0,2\n\
0,1,3\n\
1,1,4\n\
0.5,0.5,2.5\n";

/// Two malformed rows (line 3 has too few fields, line 5 a bad number).
pub const MIXED_QUALITY_CSV: &str = "X,Y,Value\n\
0,0,1\n\
1,0\n\
0,1,3\n\
1,abc,4\n\
1,1,4\n";

/// Header row only.
pub const HEADER_ONLY_CSV: &str = "X,Y,Value\n";

/// Columns reordered, mixed-case header, semicolon delimiter.
pub const REORDERED_SEMICOLON_CSV: &str = "value;y;x\n\
10;0;0\n\
20;0;5\n\
30;5;0\n";

/// Write `contents` to a fresh temporary file.
pub fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes())
        .expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
