pub(crate) mod decode;
pub(crate) mod output;
pub(crate) mod texture;
