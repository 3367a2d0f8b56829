#![allow(dead_code)]

use pbind::{Message, Value};
use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor, ReflectMessage};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageOptions,
};

/// Descriptor of the test message:
///
/// ```proto
/// syntax = "proto3";
/// package test;
///
/// enum Color { RED = 0; GREEN = 1; }
///
/// message Msg {
///   bool toggle = 1;
///   int32 number = 2;
///   sint32 snumber = 3;
///   uint32 unumber = 4;
///   int64 large = 5;
///   sint64 slarge = 6;
///   uint64 ularge = 7;
///   float sfloat = 8;
///   double lfloat = 9;
///   string text = 10;
///   bytes bin = 11;
///   Msg mp = 12;
///   repeated string tags = 13;
///   Color color = 14;
///   sfixed32 sfnumber = 15;
///   fixed32 fnumber = 16;
///   sfixed64 sflarge = 17;
///   fixed64 flarge = 18;
/// }
/// ```
pub fn msg_descriptor() -> MessageDescriptor {
    let message = DescriptorProto {
        name: Some("Msg".to_string()),
        field: vec![
            field("toggle", 1, Type::Bool),
            field("number", 2, Type::Int32),
            field("snumber", 3, Type::Sint32),
            field("unumber", 4, Type::Uint32),
            field("large", 5, Type::Int64),
            field("slarge", 6, Type::Sint64),
            field("ularge", 7, Type::Uint64),
            field("sfloat", 8, Type::Float),
            field("lfloat", 9, Type::Double),
            field("text", 10, Type::String),
            field("bin", 11, Type::Bytes),
            FieldDescriptorProto {
                type_name: Some(".test.Msg".to_string()),
                ..field("mp", 12, Type::Message)
            },
            FieldDescriptorProto {
                label: Some(Label::Repeated as i32),
                ..field("tags", 13, Type::String)
            },
            FieldDescriptorProto {
                type_name: Some(".test.Color".to_string()),
                ..field("color", 14, Type::Enum)
            },
            field("sfnumber", 15, Type::Sfixed32),
            field("fnumber", 16, Type::Fixed32),
            field("sflarge", 17, Type::Sfixed64),
            field("flarge", 18, Type::Fixed64),
        ],
        ..Default::default()
    };

    let color = EnumDescriptorProto {
        name: Some("Color".to_string()),
        value: vec![enum_value("RED", 0), enum_value("GREEN", 1)],
        ..Default::default()
    };

    let file = FileDescriptorProto {
        name: Some("bind_test.proto".to_string()),
        package: Some("test".to_string()),
        message_type: vec![message],
        enum_type: vec![color],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    };

    let pool = DescriptorPool::from_file_descriptor_set(FileDescriptorSet { file: vec![file] })
        .expect("test descriptor is valid");

    pool.get_message_by_name("test.Msg").expect("test.Msg is declared")
}

/// Descriptor of a proto2 message with map and group fields:
///
/// ```proto
/// syntax = "proto2";
/// package test;
///
/// message Legacy {
///   map<string, string> attrs = 1;
///   optional group G = 2 {
///     optional int32 n = 1;
///   }
///   optional string name = 3;
/// }
/// ```
pub fn legacy_descriptor() -> MessageDescriptor {
    let attrs_entry = DescriptorProto {
        name: Some("AttrsEntry".to_string()),
        field: vec![
            field("key", 1, Type::String),
            field("value", 2, Type::String),
        ],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    };

    let group = DescriptorProto {
        name: Some("G".to_string()),
        field: vec![field("n", 1, Type::Int32)],
        ..Default::default()
    };

    let message = DescriptorProto {
        name: Some("Legacy".to_string()),
        field: vec![
            FieldDescriptorProto {
                label: Some(Label::Repeated as i32),
                type_name: Some(".test.Legacy.AttrsEntry".to_string()),
                ..field("attrs", 1, Type::Message)
            },
            FieldDescriptorProto {
                type_name: Some(".test.Legacy.G".to_string()),
                ..field("g", 2, Type::Group)
            },
            field("name", 3, Type::String),
        ],
        nested_type: vec![attrs_entry, group],
        ..Default::default()
    };

    let file = FileDescriptorProto {
        name: Some("legacy_test.proto".to_string()),
        package: Some("test".to_string()),
        message_type: vec![message],
        syntax: Some("proto2".to_string()),
        ..Default::default()
    };

    let pool = DescriptorPool::from_file_descriptor_set(FileDescriptorSet { file: vec![file] })
        .expect("legacy descriptor is valid");

    pool.get_message_by_name("test.Legacy").expect("test.Legacy is declared")
}

pub fn new_msg() -> DynamicMessage {
    DynamicMessage::new(msg_descriptor())
}

/// Reads a scalar field by name.
pub fn get(msg: &DynamicMessage, name: &str) -> Value {
    let field = msg
        .descriptor()
        .get_field_by_name(name)
        .unwrap_or_else(|| panic!("no field {name}"));
    Message::get(msg, &field).unwrap_or_else(|| panic!("field {name} is not scalar"))
}

/// Returns `true` if the field holds a non-default value.
pub fn is_set(msg: &DynamicMessage, name: &str) -> bool {
    let field = msg.descriptor().get_field_by_name(name).unwrap();
    msg.has_field(&field)
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

fn enum_value(name: &str, number: i32) -> EnumValueDescriptorProto {
    EnumValueDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        ..Default::default()
    }
}
