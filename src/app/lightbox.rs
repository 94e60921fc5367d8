use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::widgets::{KeyListenerScope, LightboxState, ListenerHost, OverlayTarget};

/// Installs the window keydown listener that lets Escape dismiss the overlay.
struct WindowEscapeListener {
    state: RwSignal<LightboxState>,
}

impl ListenerHost for WindowEscapeListener {
    type Handle = Box<dyn Fn() + Send + Sync>;

    fn attach(&mut self) -> Self::Handle {
        let state = self.state;
        log::debug!("lightbox key listener attached");
        let stop = use_event_listener(use_window(), ev::keydown, move |event: ev::KeyboardEvent| {
            let key = event.key();
            state.maybe_update(|s| s.handle_key(&key));
        });
        Box::new(stop)
    }

    fn detach(&mut self, stop: Self::Handle) {
        log::debug!("lightbox key listener removed");
        stop();
    }
}

/// Full screen overlay for whichever image `state` holds.
#[component]
pub fn Lightbox(state: RwSignal<LightboxState>) -> impl IntoView {
    let scope = StoredValue::new(KeyListenerScope::new(WindowEscapeListener { state }));
    let active_url = Memo::new(move |_| state.with(|s| s.active_image_url().map(str::to_string)));

    Effect::new(move |_| {
        state.with(|s| scope.try_update_value(|scope| scope.sync(s)));
    });
    on_cleanup(move || {
        scope.try_update_value(|scope| scope.release());
    });

    let click = move |target: OverlayTarget| {
        state.maybe_update(|s| s.handle_click(target));
    };

    move || {
        active_url.get().map(|url| {
            view! {
                <div
                    class="fixed inset-0 z-[100] bg-black/80 flex items-center justify-center p-4"
                    on:click=move |_| click(OverlayTarget::Backdrop)
                >
                    <div
                        class="relative"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            click(OverlayTarget::Frame);
                        }
                    >
                        <img
                            src=url
                            alt="미리보기"
                            class="max-w-[95vw] max-h-[90vh] w-auto h-auto object-contain rounded-md shadow-2xl cursor-zoom-out"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                click(OverlayTarget::Image);
                            }
                        />
                    </div>
                </div>
            }
        })
    }
}

/// Thumbnail that opens `src` in the lightbox provided by an ancestor.
#[component]
pub fn ZoomableImage(src: String, alt: &'static str) -> impl IntoView {
    let state = expect_context::<RwSignal<LightboxState>>();
    let open = {
        let src = src.clone();
        move || {
            log::debug!("lightbox open: {src}");
            state.update(|s| s.open(src.clone()));
        }
    };
    let open_on_key = open.clone();

    view! {
        <div
            class="border border-gray-200 bg-white flex-1 cursor-zoom-in hover:shadow-md transition-shadow"
            role="button"
            tabindex="0"
            on:click=move |_| open()
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    open_on_key();
                }
            }
        >
            <img src=src alt=alt class="w-full h-auto object-contain" />
        </div>
    }
}
