//! src/routes/mod.rs

mod health_check;
mod home;
mod register;

pub use health_check::*;
pub use home::*;
pub use register::*;
