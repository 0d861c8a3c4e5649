//! Library components of the Folio Studio CLI.

pub mod input;
pub mod logging;
