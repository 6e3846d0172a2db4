pub(crate) mod mock;
pub(crate) mod production;
