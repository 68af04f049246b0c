use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay + centered surface for editor modals.
///
/// The frame renders no header or buttons; editors draw their own.
/// Closes on a click that starts and ends on the overlay, and on Escape.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true)
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Extra class for the modal surface (`div.modal`)
    #[prop(optional)]
    modal_class: Option<&'static str>,
    /// Extra style for the modal surface
    #[prop(optional)]
    modal_style: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    // Defer to the next tick: the overlay must not be removed during its own dispatch.
    let request_close = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let is_direct_overlay_event = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    let escape_handle = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            request_close();
        }
    });
    on_cleanup(move || escape_handle.remove());

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let surface_style = match modal_style {
        Some(extra) => format!("position: relative; {extra}"),
        None => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style="z-index: 1000;"
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct_overlay_event(&ev))
            on:click=move |ev| {
                // text selection that ends outside the surface must not close
                let should_close =
                    close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
                overlay_mouse_down.set(false);
                if should_close {
                    request_close();
                }
            }
        >
            <div class=surface_class style=surface_style on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
