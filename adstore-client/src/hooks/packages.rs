use adstore::{load_packages, PackagesState, StoreConfig, ViewState};
use dioxus::prelude::*;

use crate::api::plan_transport;

/// Page state living in a component signal. Writes fail once the owning
/// component is dropped, so late results are discarded.
#[derive(Clone, Copy)]
pub struct SignalView(pub Signal<PackagesState>);

impl ViewState for SignalView {
    fn update<R>(&self, f: impl FnOnce(&mut PackagesState) -> R) -> Option<R> {
        let mut signal = self.0;
        let mut state = signal.try_write().ok()?;
        Some(f(&mut state))
    }
}

/// Packages page state. Starts loading the active plans on first render.
pub fn use_packages() -> Signal<PackagesState> {
    let state = use_signal(PackagesState::default);
    let config = use_context::<StoreConfig>();

    use_hook(move || {
        spawn(async move {
            let transport = plan_transport(config);
            load_packages(&SignalView(state), &transport).await;
        });
    });

    state
}
