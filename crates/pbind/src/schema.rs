//! The message runtime capability consumed by the binder.
//!
//! A target message only needs to expose its field descriptors by name,
//! report each field's declared [`Kind`], and accept a typed [`Value`] for a
//! field. The crate implements these traits for `prost_reflect::DynamicMessage`;
//! other message runtimes can implement them directly.

mod kind;
pub use kind::Kind;

mod value;
pub use value::Value;

use crate::Result;

/// Immutable metadata describing one declared field of a message.
pub trait FieldDescriptor {
    /// The field name, unique within its message.
    fn name(&self) -> &str;

    /// The declared kind of the field.
    fn kind(&self) -> Kind;

    /// Returns `true` for repeated and map fields.
    fn is_list(&self) -> bool {
        false
    }
}

/// The set of field descriptors declared by a message type.
pub trait Fields {
    type Field: FieldDescriptor;

    /// Looks up a field by its exact name.
    fn by_name(&self, name: &str) -> Option<Self::Field>;

    /// Number of declared fields.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A message whose fields can be populated through descriptors.
pub trait Message {
    type Field: FieldDescriptor;
    type Fields: Fields<Field = Self::Field>;

    /// Full name of the message type, used in diagnostics.
    fn type_name(&self) -> String;

    /// Returns the message's field descriptor set.
    fn fields(&self) -> Self::Fields;

    /// Writes `value` into `field`.
    ///
    /// The value variant always matches the field kind when called by the
    /// binder; implementations may still reject a mismatched variant.
    fn set(&mut self, field: &Self::Field, value: Value) -> Result<()>;

    /// Reads back a scalar field. Returns `None` for kinds that have no
    /// [`Value`] representation.
    fn get(&self, field: &Self::Field) -> Option<Value>;
}
