//! Transient success/error banner.

use leptos::prelude::*;

use crate::state::notice::Notice;

#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            notice
                .get()
                .map(|n| {
                    let class = n.class();
                    view! { <div class=class role="status">{n.text}</div> }
                })
        }}
    }
}

/// Clear a page's notice once its display time has passed.
///
/// `expire` receives the notice's sequence number so it can ignore a timer
/// that outlived a newer banner.
pub fn schedule_expiry(notice: &Notice, expire: impl Fn(u64) + 'static) {
    #[cfg(feature = "csr")]
    {
        let seq = notice.seq;
        let wait = std::time::Duration::from_millis(u64::from(notice.display_ms));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(wait).await;
            expire(seq);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notice, expire);
    }
}
