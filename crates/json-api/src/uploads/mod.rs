//! Uploads

mod handlers;

pub(crate) use handlers::*;
