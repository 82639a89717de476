// SQLite module - provides the rusqlite-backed storage layer
//
// - config: Connection options and the builder that opens them
// - connection: The single connection handle and its execute primitives
// - params: Parameter conversion between middleware and SQLite types
// - query: Result extraction and building

pub mod config;
pub mod connection;
pub mod params;
pub mod query;

pub use config::{SqliteOptions, SqliteOptionsBuilder};
pub use connection::SqliteConnection;
pub use params::Params;
pub use query::build_result_set;
