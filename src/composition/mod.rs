pub(crate) mod introduction;
pub(crate) mod model;
