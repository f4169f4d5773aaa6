pub mod checkbox;
pub mod input;
pub mod select;

pub use checkbox::{Checkbox, CheckboxProps};
pub use input::{Input, InputProps};
pub use select::{Select, SelectOption, SelectProps};
