use dioxus::prelude::*;
use dioxus::router::Navigator;

/// Hands checkout over to the host site with a full page navigation.
#[derive(Clone, Copy)]
pub struct CheckoutNavigator(Navigator);

impl adstore::Navigator for CheckoutNavigator {
    fn goto(&self, path: &str) {
        if let Some(failure) = self.0.push(NavigationTarget::<String>::External(path.to_string())) {
            dioxus_logger::tracing::warn!("Navigation to {} failed: {:?}", path, failure);
        }
    }
}

pub fn use_checkout_navigator() -> CheckoutNavigator {
    CheckoutNavigator(navigator())
}
