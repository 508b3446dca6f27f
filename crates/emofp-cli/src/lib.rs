//! Emofp CLI - batch fingerprinting driver
//!
//! Models the two boundaries around the core: descriptor records arrive as
//! JSON produced by an external catalog collaborator, fingerprints leave as
//! JSON on stdout.

pub mod input;
pub mod output;
