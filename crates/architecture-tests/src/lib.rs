//! Architecture tests for workspace conventions. See `tests/`.
