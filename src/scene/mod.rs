pub(crate) mod element;
pub(crate) mod evaluator;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod particles;
pub(crate) mod theme;
