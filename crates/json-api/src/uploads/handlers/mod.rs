//! Upload Handlers

pub(crate) mod create;
