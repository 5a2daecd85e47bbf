use dioxus::prelude::*;

#[component]
pub fn CheckIcon() -> Element {
    rsx! {
        svg { class: "h-5 w-5 text-green-500 mr-3 mt-0.5 flex-shrink-0", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
            path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "2", d: "M5 13l4 4L19 7" }
        }
    }
}

#[component]
pub fn ArrowRightIcon() -> Element {
    rsx! {
        svg { class: "h-4 w-4 ml-2", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
            path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "2", d: "M17 8l4 4m0 0l-4 4m4-4H3" }
        }
    }
}

#[component]
pub fn PackageIcon() -> Element {
    rsx! {
        svg { class: "h-8 w-8 text-[#C70000]", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
            path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "2",
                d: "M20 7l-8-4-8 4m16 0l-8 4m8-4v10l-8 4m0-10L4 7m8 4v10M4 7v10l8 4"
            }
        }
    }
}
