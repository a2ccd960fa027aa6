pub(crate) mod adjust;
pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod gradient;
pub(crate) mod layers;
pub(crate) mod pipeline;
pub(crate) mod stamp;
