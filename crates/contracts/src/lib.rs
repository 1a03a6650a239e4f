//! Wire types shared between the admin frontend and the REST backend.

pub mod domain;
pub mod shared;
pub mod system;
