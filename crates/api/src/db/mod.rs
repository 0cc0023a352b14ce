mod climate_data;
pub mod schema;
mod sqlite;

pub use climate_data::*;
pub use schema::{reflect_tables, verify_schema, TableSchema};
pub use sqlite::*;
