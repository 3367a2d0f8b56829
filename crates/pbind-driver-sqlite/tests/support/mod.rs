#![allow(dead_code)]

use pbind::{Message, Value};
use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor, ReflectMessage};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet};

/// ```proto
/// syntax = "proto3";
/// package todo;
///
/// message Todo {
///   uint64 id = 1;
///   string title = 2;
///   bool done = 3;
///   int32 priority = 4;
///   double estimate = 5;
///   float progress = 6;
///   bytes attachment = 7;
///   Todo parent = 8;
/// }
/// ```
pub fn todo_descriptor() -> MessageDescriptor {
    let message = DescriptorProto {
        name: Some("Todo".to_string()),
        field: vec![
            field("id", 1, Type::Uint64),
            field("title", 2, Type::String),
            field("done", 3, Type::Bool),
            field("priority", 4, Type::Int32),
            field("estimate", 5, Type::Double),
            field("progress", 6, Type::Float),
            field("attachment", 7, Type::Bytes),
            FieldDescriptorProto {
                type_name: Some(".todo.Todo".to_string()),
                ..field("parent", 8, Type::Message)
            },
        ],
        ..Default::default()
    };

    let file = FileDescriptorProto {
        name: Some("todo.proto".to_string()),
        package: Some("todo".to_string()),
        message_type: vec![message],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    };

    DescriptorPool::from_file_descriptor_set(FileDescriptorSet { file: vec![file] })
        .expect("test descriptor is valid")
        .get_message_by_name("todo.Todo")
        .expect("todo.Todo is declared")
}

pub fn get(msg: &DynamicMessage, name: &str) -> Value {
    let field = msg
        .descriptor()
        .get_field_by_name(name)
        .unwrap_or_else(|| panic!("no field {name}"));
    Message::get(msg, &field).unwrap_or_else(|| panic!("field {name} is not scalar"))
}

fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(name.to_string()),
        ..Default::default()
    }
}
