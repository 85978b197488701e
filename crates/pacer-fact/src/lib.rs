//! Fetch one random fact over HTTP.
//!
//! [`get_random_fact`] never fails: transport, status and decoding errors
//! are classified in [`FactError`] and then rendered as a single
//! `Error fetching fact: ...` line.

mod client;
mod error;
mod fact;

pub use client::{ClientSetting, FACT_URL, FactClient};
pub use error::{FactError, Result};
pub use fact::{ERROR_PREFIX, Fact, NO_FACT, describe, fetch_with, get_random_fact};
