use adstore::CardView;
use dioxus::prelude::*;

use crate::components::{ArrowRightIcon, Button, CheckIcon};

#[component]
pub fn PlanCard(card: CardView, on_choose: EventHandler<Option<String>>) -> Element {
    let border = if card.highlighted {
        "border-yellow-300"
    } else {
        "border-gray-200"
    };
    let id = card.id.clone();

    rsx! {
        div { class: "plan-card rounded-xl border p-5 {border}",
            div { class: "flex items-center justify-between mb-4",
                div {
                    h3 { class: "text-xl font-semibold", "{card.name}" }
                    div { class: "text-sm text-gray-600", "{card.subtitle}" }
                }
                if card.premium_badge {
                    div { class: "bg-yellow-400 text-white px-3 py-1 rounded-full text-sm font-semibold",
                        "Premium"
                    }
                }
            }

            p { class: "text-gray-700 mb-4", "{card.description}" }

            div { class: "mb-4",
                div { class: "font-semibold mb-2", "Features" }
                ul { class: "space-y-2",
                    for feature in card.features.iter() {
                        li { class: "flex items-start",
                            CheckIcon {}
                            span { class: "text-sm text-gray-700", "{feature}" }
                        }
                    }
                }
            }

            Button {
                onclick: move |_| on_choose.call(id.clone()),
                "{card.action_label}"
                ArrowRightIcon {}
            }
        }
    }
}
