pub(crate) mod errors;
pub(crate) mod http_client;
pub(crate) mod shutdown;
