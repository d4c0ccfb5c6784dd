//! Product image uploads

mod errors;
mod service;

pub use errors::*;
pub use service::*;
