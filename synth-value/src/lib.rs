//! `synth-value` is the value layer shared by the template engines: every
//! piece of host data an engine renders, tests or compares is seen through a
//! [`Value`].
//!
//! # Features
//!
//! - **Closed set of adapter kinds**: numbers, scalars (none, booleans,
//!   characters, text) and sequences, each tagged with a [`Capability`]
//! - **Total comparison**: [`Value::equal`] and [`Value::less`] are defined for
//!   every pair of values, across kinds
//! - **Zero-copy sequences**: array adapters borrow the caller's buffer or
//!   share a reference-counted one, and adapt elements lazily
//! - **One conversion bundle**: text, number and character-width conversions
//!   go through [`ValueTraits`], at whatever working width an engine needs
//! - **`no_std` compatible**: works with just `alloc`
//!
//! # Example
//!
//! ```
//! use synth_value::{Adapter, Value};
//!
//! let scores = [3, 1, 2];
//! let value = Value::from(&scores);
//!
//! assert!(value.to_boolean());
//! assert_eq!(value.to_number(), 3.0);
//! assert_eq!(value.to_string(), "3,1,2");
//! assert!(Value::from(3i32).equal(&Value::from(3.0f64)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod tracing_macros;

mod error;
pub use error::*;

mod sink;
pub use sink::*;

mod traits;
pub use traits::{Character, DefaultTraits, Number, Text, ValueTraits};

mod value;
pub use value::*;

mod number;
pub use number::*;

mod scalar;
pub use scalar::*;

mod array;
pub use array::*;

mod adapt;
pub use adapt::*;
