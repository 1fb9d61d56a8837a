pub mod error;
pub mod home;
pub mod results;

pub use error::error_page;
pub use home::home_page;
pub use results::{no_matches_page, results_page, NO_MATCHES_MESSAGE};
