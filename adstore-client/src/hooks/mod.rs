pub mod navigation;
pub mod packages;

pub use navigation::use_checkout_navigator;
pub use packages::use_packages;
