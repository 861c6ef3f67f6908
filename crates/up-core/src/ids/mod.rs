//! ID type wrappers for type safety.

pub mod request_id;

pub use request_id::RequestId;
