pub mod extract;
pub mod key;
