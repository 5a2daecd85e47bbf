use crate::models::{AdPackage, PackageType};
use crate::pricing::{action_label, duration_line};
use crate::view::PackagesState;

pub const PAGE_HEADING: &str = "Advertisement Packages";

/// What the packages page shows for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Skeleton placeholder: no cards and no error.
    Loading,
    Ready {
        heading: &'static str,
        error: Option<String>,
        cards: Vec<CardView>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: Option<String>,
    pub name: String,
    /// `{duration} days • {price label}`
    pub subtitle: String,
    pub premium_badge: bool,
    /// Gold border for packages tagged `premium`.
    pub highlighted: bool,
    pub description: String,
    pub features: Vec<String>,
    pub action_label: String,
}

impl CardView {
    pub fn new(package: &AdPackage, currency: &str) -> Self {
        Self {
            id: package.id.clone(),
            name: package.name.clone(),
            subtitle: duration_line(package.duration, package.price, currency),
            premium_badge: package.premium,
            highlighted: package.package_type == PackageType::Premium,
            description: package.description.clone(),
            features: package.features.clone(),
            action_label: action_label(package.price, currency),
        }
    }
}

impl PageView {
    pub fn from_state(state: &PackagesState, currency: &str) -> Self {
        if state.loading {
            return PageView::Loading;
        }

        PageView::Ready {
            heading: PAGE_HEADING,
            error: state.error.clone(),
            cards: state
                .packages
                .iter()
                .map(|package| CardView::new(package, currency))
                .collect(),
        }
    }
}
