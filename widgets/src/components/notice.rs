//! Floating alert shown after a status change.

use leptos::prelude::*;

use crate::consts::NOTICE_TIMEOUT_MS;
use crate::state::notice::Notice;

/// Dismissible alert pinned to the top of the viewport.
#[component]
pub fn NoticeAlert(notice: Notice) -> impl IntoView {
    let open = RwSignal::new(true);
    let class = notice.class();
    let message = notice.message;

    view! {
        <Show when=move || open.get()>
            <div class=class.clone() role="alert" style="z-index: 9999;">
                {message.clone()}
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Cerrar"
                    on:click=move |_| open.set(false)
                ></button>
            </div>
        </Show>
    }
}

/// Mount `notice` onto `<body>` and unmount it after the timeout.
pub fn show(notice: Notice) {
    let Some(body) = crate::util::dom::body() else {
        log::warn!("no <body>; notice dropped: {}", notice.message);
        return;
    };
    let handle = leptos::mount::mount_to(body, move || view! { <NoticeAlert notice=notice /> });
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(NOTICE_TIMEOUT_MS))).await;
        drop(handle);
    });
}
