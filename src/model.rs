pub mod diagnostic;
pub mod event;

pub use diagnostic::Diagnostic;
pub use event::{EventList, EventRecord};
