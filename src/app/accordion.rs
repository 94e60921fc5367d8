use leptos::{html, prelude::*};

use crate::{content::PanelItem, widgets::AccordionState};

/// List of panels where at most one is expanded at a time.
#[component]
pub fn AccordionList(
    items: &'static [PanelItem],
    #[prop(optional)] initially_open: Option<usize>,
) -> impl IntoView {
    let state = RwSignal::new(AccordionState::new(initially_open));

    view! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden">
            <ul>
                {items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let is_open = Signal::derive(move || state.with(|s| s.is_open(index)));
                        let on_toggle = move |_| {
                            state.update(|s| s.toggle(index));
                            log::debug!(
                                "accordion open panel: {:?}",
                                state.with_untracked(|s| s.open_index())
                            );
                        };
                        view! { <Panel item=*item is_open on_toggle /> }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Panel(
    item: PanelItem,
    is_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();

    // before hydration there is no node to measure, so an open panel is unbounded
    let body_style = move || {
        if is_open.get() {
            let max_height = content_ref
                .get()
                .map(|el| format!("{}px", el.scroll_height()))
                .unwrap_or_else(|| "none".to_string());
            format!("max-height: {max_height}; opacity: 1")
        } else {
            "max-height: 0px; opacity: 0".to_string()
        }
    };

    view! {
        <li class="border-b border-gray-200 last:border-b-0">
            <button
                class="relative flex gap-3 items-center w-full py-5 text-left hover:bg-gray-50 transition-colors duration-200 px-4"
                on:click=move |_| on_toggle.run(())
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
            >
                <span class=move || {
                    if is_open.get() {
                        "text-2xl transition-all duration-200 scale-110"
                    } else {
                        "text-2xl transition-all duration-200"
                    }
                }>{item.icon}</span>
                <div class="flex-1">
                    <h3 class=move || {
                        if is_open.get() {
                            "font-semibold text-lg transition-colors duration-200 text-blue-600"
                        } else {
                            "font-semibold text-lg transition-colors duration-200 text-gray-900"
                        }
                    }>{item.title}</h3>
                    <p class="text-sm text-gray-600 mt-0.5">{item.summary}</p>
                </div>
                <svg
                    class=move || {
                        if is_open.get() {
                            "w-5 h-5 text-gray-500 transition-transform duration-300 rotate-180"
                        } else {
                            "w-5 h-5 text-gray-500 transition-transform duration-300"
                        }
                    }
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M19 9l-7 7-7-7"
                    />
                </svg>
            </button>
            <div
                node_ref=content_ref
                class="transition-all duration-300 ease-in-out overflow-hidden"
                style=body_style
            >
                <div class="px-4 pb-5 pl-16">
                    <ul class="space-y-2">
                        {item
                            .bullet_points
                            .iter()
                            .map(|point| {
                                view! {
                                    <li class="flex items-start gap-2 text-gray-700">
                                        <span class="text-blue-600 mt-1">"✓"</span>
                                        <span>{*point}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </li>
    }
}
