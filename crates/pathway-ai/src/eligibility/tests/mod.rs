pub(crate) mod common;

mod crs;
mod intake;
