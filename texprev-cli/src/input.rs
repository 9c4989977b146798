//! Reading markup from a file or stdin

use std::fs;
use std::io::{self, Read};

/// Path that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Read the whole source, from stdin when `path` is `-`.
pub fn read_source(path: &str) -> io::Result<String> {
    if path == STDIN_PATH {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(path)
    }
}

/// Name to use in messages for `path`.
pub fn display_name(path: &str) -> &str {
    if path == STDIN_PATH {
        "<stdin>"
    } else {
        path
    }
}
