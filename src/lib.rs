pub mod configuration;
pub mod conversion;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod process;
pub mod util;

pub use conversion::Conversion;
pub use error::{ConversionError, ExtractError, ParseError};
