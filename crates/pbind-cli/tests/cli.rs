use clap::Parser;
use pbind_cli::{decode_message, query, write_json, Cli};
use pretty_assertions::assert_eq;
use prost::Message as _;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet};

/// ```proto
/// syntax = "proto3";
/// package demo;
///
/// message Item {
///   int32 id = 1;
///   string name = 2;
///   bool active = 3;
/// }
/// ```
fn descriptor_set() -> Vec<u8> {
    let message = DescriptorProto {
        name: Some("Item".to_string()),
        field: vec![
            field("id", 1, Type::Int32),
            field("name", 2, Type::String),
            field("active", 3, Type::Bool),
        ],
        ..Default::default()
    };

    FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("demo.proto".to_string()),
            package: Some("demo".to_string()),
            message_type: vec![message],
            syntax: Some("proto3".to_string()),
            ..Default::default()
        }],
    }
    .encode_to_vec()
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

#[test]
fn decode_known_message() {
    let descriptor = decode_message(&descriptor_set(), "demo.Item").unwrap();
    assert_eq!(descriptor.full_name(), "demo.Item");
}

#[test]
fn decode_unknown_message() {
    let err = decode_message(&descriptor_set(), "demo.Missing").unwrap_err();
    assert_eq!(err.to_string(), "message demo.Missing not found in descriptor set");
}

#[test]
fn decode_garbage() {
    assert!(decode_message(b"\xff\xff\xff", "demo.Item").is_err());
}

#[tokio::test]
async fn query_sqlite_prints_json_lines() {
    let descriptor = decode_message(&descriptor_set(), "demo.Item").unwrap();

    let messages = query(
        "sqlite::memory:",
        "SELECT 7 AS id, 'lamp' AS name UNION ALL SELECT 8, 'desk'",
        &descriptor,
    )
    .await
    .unwrap();

    let mut out = vec![];
    write_json(&mut out, &messages).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"id\":7,\"name\":\"lamp\"}\n{\"id\":8,\"name\":\"desk\"}\n"
    );
}

#[tokio::test]
async fn query_reports_bind_errors() {
    let descriptor = decode_message(&descriptor_set(), "demo.Item").unwrap();

    let err = query("sqlite::memory:", "SELECT 'x' AS id", &descriptor)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "pbind scan: column \"id\": cannot scan text into int32 (expected int64)"
    );
}

#[tokio::test]
async fn query_rejects_unknown_scheme() {
    let descriptor = decode_message(&descriptor_set(), "demo.Item").unwrap();

    let err = query("mysql://localhost/app", "SELECT 1", &descriptor)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "unsupported database scheme \"mysql\"");
}

#[tokio::test]
async fn run_reads_descriptor_set_from_disk() {
    let path = std::env::temp_dir().join(format!("pbind-cli-{}.pb", std::process::id()));
    std::fs::write(&path, descriptor_set()).unwrap();

    let cli = Cli::try_parse_from([
        "pbind",
        "--database-url",
        "sqlite::memory:",
        "--descriptor-set",
        path.to_str().unwrap(),
        "--message",
        "demo.Item",
        "SELECT 1 AS id, 'chair' AS name",
    ])
    .unwrap();

    let mut out = vec![];
    cli.run(&mut out).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "{\"id\":1,\"name\":\"chair\"}\n");
}

#[test]
fn verbose_flag() {
    let cli = Cli::try_parse_from([
        "pbind",
        "-v",
        "--database-url",
        "sqlite::memory:",
        "--descriptor-set",
        "items.pb",
        "--message",
        "demo.Item",
        "SELECT 1",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.message, "demo.Item");
    assert_eq!(cli.query, "SELECT 1");
}
