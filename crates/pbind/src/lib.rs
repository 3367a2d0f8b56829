//! Bind query result rows to protocol buffer messages.
//!
//! Columns (or their aliases) are matched by name against the message's
//! field descriptors, and each raw column value is coerced into the exact
//! scalar type the field declares. No reflection over Rust types and no
//! per-query scanning code is involved.
//!
//! ```ignore
//! while rows.next()? {
//!     let mut msg = DynamicMessage::new(descriptor.clone());
//!     pbind::scan(&mut rows, &mut msg)?;
//!     out.push(msg);
//! }
//! ```

mod error;
pub use error::Error;

pub mod driver;
pub use driver::{Rows, Scan, ValueRef};

mod field;
pub use field::Field;

#[cfg(feature = "prost-reflect")]
mod reflect;

mod scan;
pub use scan::{scan, Dest};

pub mod schema;
pub use schema::{FieldDescriptor, Fields, Kind, Message, Value};

/// A Result type alias that uses pbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
