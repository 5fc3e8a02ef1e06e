pub mod error;
pub mod event;
pub mod machine;
pub mod model;

pub use error::{StateError, StateResult};
pub use event::{SheetEvent, StateTransition};
pub use machine::SheetMachine;
pub use model::SheetState;
