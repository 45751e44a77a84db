//! Miscellaneous utilities.

/// Integer helpers.
pub mod numeric;
