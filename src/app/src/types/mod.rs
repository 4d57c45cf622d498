//! Domain-based type organization
//!
//! - mac_address: MAC address validation and formatting
//! - endpoint: Request/response bodies of the endpoint API
//! - feedback: Result message shown below the form
//! - form: Submit button state

pub mod endpoint;
pub mod feedback;
pub mod form;
pub mod mac_address;

pub use endpoint::*;
pub use feedback::*;
pub use form::*;
pub use mac_address::*;
