pub(crate) mod spotlight;
pub(crate) mod target;
