pub(crate) mod config;
pub(crate) mod endpoints;
pub(crate) mod sample;
pub(crate) mod scheduler;
