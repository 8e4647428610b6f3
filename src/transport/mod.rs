//! HTTP transport: JSON request in, typed result or typed error out.

mod http;

pub use http::{HttpTransport, TransportError};
