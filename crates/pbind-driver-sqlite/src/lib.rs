mod row;
pub use row::Row;

mod value;

use pbind::{Error, Message, Result};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    pub fn connect(&self) -> Result<Connection> {
        tracing::debug!(url = %self.url(), "connecting to sqlite");

        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    /// The underlying rusqlite connection, for queries that scan rows manually.
    pub fn as_rusqlite(&self) -> &RusqliteConnection {
        &self.connection
    }

    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection
            .execute_batch(sql)
            .map_err(Error::driver_operation_failed)
    }

    pub fn execute<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<usize> {
        self.connection
            .execute(sql, params)
            .map_err(Error::driver_operation_failed)
    }

    /// Runs a query and scans every row into a fresh message from `new_message`.
    ///
    /// Fails on the first row that cannot be scanned.
    pub fn query_all<M, P, F>(&self, sql: &str, params: P, mut new_message: F) -> Result<Vec<M>>
    where
        M: Message,
        P: rusqlite::Params,
        F: FnMut() -> M,
    {
        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(Error::driver_operation_failed)?;

        tracing::trace!(sql, columns = stmt.column_count(), "query");

        let mut rows = stmt.query(params).map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut msg = new_message();
                    pbind::scan(&mut Row::new(row), &mut msg)?;
                    ret.push(msg);
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(Error::driver_operation_failed(err));
                }
            }
        }

        Ok(ret)
    }
}
