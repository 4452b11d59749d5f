pub mod deferred;
pub mod ext;
pub mod guard;

pub use crate::domain::ports::{Close, CloseWithContext, ErrorLogger};
