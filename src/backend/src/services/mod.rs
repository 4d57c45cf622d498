//! Business logic services
//!
//! This module contains business logic separated from HTTP concerns.
//! Services are stateless operations over a [`crate::clearpass_client::ClearPassApi`]
//! so they can be tested against mocks.

pub mod endpoint;
