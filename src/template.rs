pub(crate) mod area;
pub(crate) mod registry;
