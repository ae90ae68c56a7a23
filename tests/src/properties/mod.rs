//! Property tests against simple sequential models.

pub mod ledger;
pub mod linear_seq;
