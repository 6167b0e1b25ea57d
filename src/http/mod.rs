pub mod req;
pub mod res;

pub use {req::Request, res::Response};
