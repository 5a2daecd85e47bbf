use dioxus::prelude::*;

#[component]
pub fn Button(
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "w-full flex items-center justify-center px-4 py-2 bg-[#C70000] hover:bg-[#a30000] text-white rounded-lg font-medium transition-all",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
