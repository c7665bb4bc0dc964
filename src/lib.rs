//! Contextualized assertions over JSON values and record collections.
//!
//! Every failed check yields an [`domain::error::AssertFailure`] whose message
//! carries the caller's context and detail labels.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
