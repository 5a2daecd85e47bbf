pub mod packages;

pub use packages::Packages;
