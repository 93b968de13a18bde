pub mod build;
pub mod decode;
pub mod lookup;
