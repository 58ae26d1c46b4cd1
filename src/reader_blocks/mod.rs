pub(crate) mod lines;

pub mod header;
