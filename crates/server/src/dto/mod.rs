mod event;
mod request;
mod trip;

pub use event::*;
pub use request::*;
pub use trip::*;
