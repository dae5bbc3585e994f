pub mod lazy;
