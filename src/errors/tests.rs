//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use super::errors::Error;
use std::{error::Error as _, io, path::PathBuf};

#[test]
fn test_read_source_error_display() {
    let error = Error::ReadSource {
        path: PathBuf::from("missing.lang"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };

    let message = error.to_string();

    assert!(message.contains("failed to read source file"));
    assert!(message.contains("missing.lang"));
    assert!(message.contains("no such file"));
}

#[test]
fn test_read_source_error_source() {
    let error = Error::ReadSource {
        path: PathBuf::from("missing.lang"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
    };

    assert!(error.source().is_some());
}
