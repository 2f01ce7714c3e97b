//! Pipeline stages for payload extraction.
//!
//! Each submodule implements exactly one step, and each step has its own
//! [`crate::error::Step`] so a failure says where the run stopped.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ schema ──▶ decode ──▶ write
//! (JSON)    (locate)   (base64)   (file)
//! ```
//!
//! 1. [`input`]  — read the response file and parse it as JSON
//! 2. [`schema`] — locate `output_schema.data` and the envelope metadata
//! 3. [`decode`] — strict standard base64 decode, optional PDF sniff
//! 4. [`write`]  — replace the output file, atomically by default

pub mod decode;
pub mod input;
pub mod schema;
pub mod write;
