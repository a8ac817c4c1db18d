//! HTTP Response domain types

mod http_response;
mod spec;

pub use http_response::HttpResponse;
pub use spec::ResponseSpec;
