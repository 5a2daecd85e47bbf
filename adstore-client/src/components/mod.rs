pub mod buttons;
pub mod cards;
pub mod icons;

pub use buttons::Button;
pub use cards::PlanCard;
pub use icons::{ArrowRightIcon, CheckIcon, PackageIcon};
