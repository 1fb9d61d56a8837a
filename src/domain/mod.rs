pub mod listing;
pub mod price;
pub mod search;
