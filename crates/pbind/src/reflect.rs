//! Binding for [`prost_reflect::DynamicMessage`].

use crate::schema::{FieldDescriptor, Fields, Kind, Message, Value};
use crate::Result;
use prost::bytes::Bytes;
use prost_reflect::{DynamicMessage, MessageDescriptor, ReflectMessage};

impl FieldDescriptor for prost_reflect::FieldDescriptor {
    fn name(&self) -> &str {
        prost_reflect::FieldDescriptor::name(self)
    }

    fn kind(&self) -> Kind {
        use prost_reflect::Kind as K;

        match prost_reflect::FieldDescriptor::kind(self) {
            K::Bool => Kind::Bool,
            K::Int32 => Kind::Int32,
            K::Sint32 => Kind::Sint32,
            K::Sfixed32 => Kind::Sfixed32,
            K::Uint32 => Kind::Uint32,
            K::Fixed32 => Kind::Fixed32,
            K::Int64 => Kind::Int64,
            K::Sint64 => Kind::Sint64,
            K::Sfixed64 => Kind::Sfixed64,
            K::Uint64 => Kind::Uint64,
            K::Fixed64 => Kind::Fixed64,
            K::Float => Kind::Float,
            K::Double => Kind::Double,
            K::String => Kind::String,
            K::Bytes => Kind::Bytes,
            K::Enum(_) => Kind::Enum,
            K::Message(_) if self.is_group() => Kind::Group,
            K::Message(_) => Kind::Message,
        }
    }

    fn is_list(&self) -> bool {
        prost_reflect::FieldDescriptor::is_list(self) || self.is_map()
    }
}

impl Fields for MessageDescriptor {
    type Field = prost_reflect::FieldDescriptor;

    fn by_name(&self, name: &str) -> Option<Self::Field> {
        self.get_field_by_name(name)
    }

    fn len(&self) -> usize {
        self.fields().len()
    }
}

impl Message for DynamicMessage {
    type Field = prost_reflect::FieldDescriptor;
    type Fields = MessageDescriptor;

    fn type_name(&self) -> String {
        self.descriptor().full_name().to_string()
    }

    fn fields(&self) -> MessageDescriptor {
        self.descriptor()
    }

    fn set(&mut self, field: &Self::Field, value: Value) -> Result<()> {
        self.try_set_field(field, into_reflect(value))
            .map_err(|err| crate::err!("{}", err))
    }

    fn get(&self, field: &Self::Field) -> Option<Value> {
        from_reflect(&self.get_field(field))
    }
}

fn into_reflect(value: Value) -> prost_reflect::Value {
    use prost_reflect::Value as V;

    match value {
        Value::Bool(v) => V::Bool(v),
        Value::I32(v) => V::I32(v),
        Value::U32(v) => V::U32(v),
        Value::I64(v) => V::I64(v),
        Value::U64(v) => V::U64(v),
        Value::F32(v) => V::F32(v),
        Value::F64(v) => V::F64(v),
        Value::String(v) => V::String(v),
        Value::Bytes(v) => V::Bytes(Bytes::from(v)),
    }
}

fn from_reflect(value: &prost_reflect::Value) -> Option<Value> {
    use prost_reflect::Value as V;

    Some(match value {
        V::Bool(v) => Value::Bool(*v),
        V::I32(v) => Value::I32(*v),
        V::U32(v) => Value::U32(*v),
        V::I64(v) => Value::I64(*v),
        V::U64(v) => Value::U64(*v),
        V::F32(v) => Value::F32(*v),
        V::F64(v) => Value::F64(*v),
        V::String(v) => Value::String(v.clone()),
        V::Bytes(v) => Value::Bytes(v.to_vec()),
        _ => return None,
    })
}
