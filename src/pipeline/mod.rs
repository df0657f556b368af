pub(crate) mod fingerprint;
pub(crate) mod render;
pub(crate) mod sink;
