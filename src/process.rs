pub mod date;
pub mod duplicates;
pub mod extract;
pub mod sanitize;

pub use duplicates::check_duplicates;
pub use extract::extract_fields;
pub use sanitize::remove_malformed;
