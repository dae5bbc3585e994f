pub mod builder;
pub mod macros;
