//! 通知トースト

use crate::runtime::Controller;
use leptos::prelude::*;

#[component]
pub fn NotificationToast(controller: Controller) -> impl IntoView {
    let current = Memo::new(move |_| controller.with(|c| c.notification().cloned()));

    move || {
        current.get().map(|n| {
            let id = n.id;
            view! {
                <div
                    class=format!("notification notification--{}", n.kind.as_str())
                    style=format!("background-color: {}", n.kind.color())
                    role="status"
                >
                    <span>{n.message}</span>
                    <button
                        class="notification-close"
                        on:click=move |_| {
                            controller.update(|c| {
                                c.dismiss_notification(id);
                            });
                        }
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
