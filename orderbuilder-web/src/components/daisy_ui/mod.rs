pub mod atoms;
pub mod foundation;

pub use foundation::DaisySize;

pub use atoms::*;
