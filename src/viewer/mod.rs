pub(crate) mod context;
pub(crate) mod cube;
pub(crate) mod raster;
pub(crate) mod session;
pub(crate) mod texture;
#[cfg(feature = "window")]
pub(crate) mod window;
