//! # iobuf
//!
//! A growable byte buffer for assembling text and bytes.
//!
//! [`ByteBuffer`] grows by a fixed unit chosen when it is created, instead of doubling,
//! and refuses to grow past [`MAX_CAPACITY`]. On top of plain appends it offers
//! formatted writes through [`bufwrite!`], front and back removal, padding with
//! [`ByteBuffer::set_len`], C string views, prefix/suffix/whitespace predicates and
//! Boyer-Moore substring search.
//!
//! Every fallible operation returns a [`Result`] with an [`Error`], and a failed
//! operation leaves the buffer as it was.
//!
//! ```
//! use iobuf::{bufwrite, ByteBuffer};
//!
//! let mut buff = ByteBuffer::new(16)?;
//! buff.push_str("id=")?;
//! bufwrite!(buff, "{};", 42)?;
//!
//! assert_eq!(buff, "id=42;");
//! assert_eq!(buff.find(";", 0)?, 5);
//! assert!(buff.starts_with("id"));
//! # Ok::<(), iobuf::Error>(())
//! ```
//!
//! ## Crate features
//!  - `std` (default): implements [`std::error::Error`] for [`Error`] and
//!    [`std::io::Write`] for [`ByteBuffer`], and enables printing to the standard output.
//!    Without it the crate is `no_std` and only needs `alloc`.
//!  - `inline-more`: inline more functions.
//!
//! ## Logging
//! Reallocations are reported through [`tracing`] at the `TRACE` level and refused
//! growths or failed formatted writes at the `DEBUG` level.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(_doc, feature(doc_cfg))]

extern crate alloc;

pub mod error;
mod macros;
pub mod types;
pub mod util;

pub use error::Error;
pub use types::{ByteBuffer, TryExtend, MAX_CAPACITY};
