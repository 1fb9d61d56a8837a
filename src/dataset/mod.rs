mod error;
mod loader;
mod table;

pub use error::LoadError;
pub use loader::{load_from_path, load_listings};
pub use table::{ColumnIndex, ListingTable};
