//! HTTP transport seam.
//!
//! The client only needs "GET this URL and give me the body". Keeping that
//! behind [`Transport`] lets tests substitute canned responses.

mod http;
mod traits;

pub use http::HttpTransport;
pub use traits::Transport;
