mod ingest;
mod records;
mod summary;
mod utils;

pub use ingest::*;
pub use records::*;
pub use summary::*;
pub use utils::*;
