//! Core components for presigning object store requests.
//!
//! This crate provides the leaf primitives shared by the presign services:
//!
//! - [`Error`] and [`Result`]: the error type used across the workspace
//! - [`Env`]: abstract access to environment variables, with [`OsEnv`] and [`StaticEnv`]
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 helpers
//! - [`time`]: Time capture and formatting helpers
//! - [`utils`]: General utilities including data redaction
//!
//! ## Example
//!
//! ```
//! use presign_core::hash::hex_sha256;
//!
//! assert_eq!(
//!     hex_sha256(b"abc"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
