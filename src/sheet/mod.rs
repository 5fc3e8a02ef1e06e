mod controller;
mod presenter;

pub use controller::{RequestOutcome, SheetController};
pub use presenter::{SheetPresenter, TracingPresenter};
