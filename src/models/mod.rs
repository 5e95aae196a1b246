pub mod clock;
pub mod constant;
pub mod error;
pub mod timer;
