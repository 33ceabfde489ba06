pub mod cbc;
pub mod integrity;
pub mod random;
