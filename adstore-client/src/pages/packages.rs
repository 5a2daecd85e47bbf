use adstore::{select_package, PageView, StoreConfig};
use dioxus::prelude::*;

use crate::components::{PackageIcon, PlanCard};
use crate::hooks::{use_checkout_navigator, use_packages};

#[component]
pub fn Packages() -> Element {
    let state = use_packages();
    let config = use_context::<StoreConfig>();
    let checkout = use_checkout_navigator();

    let view = PageView::from_state(&state.read(), &config.currency_symbol);

    match view {
        PageView::Loading => rsx! {
            main { class: "max-w-7xl mx-auto p-6",
                div { class: "animate-pulse",
                    div { class: "h-8 bg-gray-200 rounded w-48 mb-4" }
                    div { class: "h-4 bg-gray-200 rounded w-96" }
                }
            }
        },
        PageView::Ready {
            heading,
            error,
            cards,
        } => {
            let cards: Vec<(String, _)> = cards
                .into_iter()
                .enumerate()
                .map(|(index, card)| (card.id.clone().unwrap_or_else(|| index.to_string()), card))
                .collect();

            rsx! {
                main { class: "max-w-7xl mx-auto p-6",
                    div { class: "flex items-center gap-4 mb-6",
                        PackageIcon {}
                        h1 { class: "text-2xl font-bold", "{heading}" }
                    }

                    if let Some(error) = error {
                        div { class: "mb-4 text-red-600", "{error}" }
                    }

                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        for (key, card) in cards {
                            PlanCard {
                                key: "{key}",
                                card,
                                on_choose: move |id: Option<String>| {
                                    select_package(&checkout, id.as_deref());
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
