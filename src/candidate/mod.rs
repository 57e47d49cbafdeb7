//! Candidate selection and pruning.
//!
//! Includes Top-K collection, culling and merging of blurred peaks, and
//! suppression of the zero-offset bias.

pub(crate) mod merge;
pub(crate) mod suppress;
pub(crate) mod topk;
