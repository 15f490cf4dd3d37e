pub(crate) mod frame;
pub(crate) mod pipeline;
pub(crate) mod surface;
