mod controller;
mod fsm;
mod notification;

pub use controller::*;
pub use fsm::*;
pub use notification::*;
