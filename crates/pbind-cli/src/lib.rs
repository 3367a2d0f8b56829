//! Run a query and print every row as a protobuf message in JSON form.

use anyhow::{bail, Context, Result};
use clap::Parser;
use pbind_driver_postgresql::PostgreSQL;
use pbind_driver_sqlite::Sqlite;
use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor};
use std::{io::Write, path::PathBuf};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "pbind")]
#[command(about = "Bind SQL query results to protobuf messages")]
#[command(version)]
pub struct Cli {
    /// Database to query, e.g. `sqlite:./app.db` or `postgresql://localhost/app`
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Encoded `FileDescriptorSet`, as written by `protoc --descriptor_set_out`
    #[arg(long)]
    pub descriptor_set: PathBuf,

    /// Fully qualified name of the message each row is bound to
    #[arg(long)]
    pub message: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// SQL query to run
    pub query: String,
}

impl Cli {
    pub async fn run(&self, out: &mut impl Write) -> Result<()> {
        let bytes = std::fs::read(&self.descriptor_set).with_context(|| {
            format!(
                "failed to read descriptor set {}",
                self.descriptor_set.display()
            )
        })?;

        let descriptor = decode_message(&bytes, &self.message)?;
        let messages = query(&self.database_url, &self.query, &descriptor).await?;

        tracing::info!(rows = messages.len(), message = %self.message, "query complete");

        write_json(out, &messages)
    }
}

/// Finds `name` in an encoded `FileDescriptorSet`.
pub fn decode_message(descriptor_set: &[u8], name: &str) -> Result<MessageDescriptor> {
    let pool =
        DescriptorPool::decode(descriptor_set).context("failed to decode descriptor set")?;

    match pool.get_message_by_name(name) {
        Some(descriptor) => Ok(descriptor),
        None => bail!("message {name} not found in descriptor set"),
    }
}

/// Runs `sql` against the database at `url`, binding every row into a new `descriptor` message.
pub async fn query(
    url: &str,
    sql: &str,
    descriptor: &MessageDescriptor,
) -> Result<Vec<DynamicMessage>> {
    let new_message = || DynamicMessage::new(descriptor.clone());

    let scheme = Url::parse(url)
        .with_context(|| format!("invalid database URL {url:?}"))?
        .scheme()
        .to_string();

    tracing::debug!(scheme = %scheme, sql, "running query");

    let messages = match scheme.as_str() {
        "sqlite" => Sqlite::new(url)?.connect()?.query_all(sql, [], new_message)?,
        "postgresql" => {
            PostgreSQL::connect(url)
                .await?
                .query_all(sql, &[], new_message)
                .await?
        }
        _ => bail!("unsupported database scheme {scheme:?}"),
    };

    Ok(messages)
}

/// Writes one JSON object per message, one per line.
pub fn write_json(out: &mut impl Write, messages: &[DynamicMessage]) -> Result<()> {
    for msg in messages {
        serde_json::to_writer(&mut *out, msg)?;
        writeln!(out)?;
    }
    Ok(())
}
