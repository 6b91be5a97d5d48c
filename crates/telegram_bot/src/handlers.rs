//! Command handlers, one module per command family.

pub(crate) mod budget;
pub(crate) mod categories;
pub(crate) mod entry;
pub(crate) mod estimate;
pub(crate) mod income;
pub(crate) mod user;

/// Fallback shown when a store fault reaches the chat layer. The fault
/// itself is logged; the user only needs to know the request failed.
pub(crate) const GENERIC_ERROR: &str = "Something went wrong. Please try again later!";

pub(crate) const NO_RECORDS: &str = "Oops!Sorry! No spending records found!";
