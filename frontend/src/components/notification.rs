use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::EXIT_ANIMATION_MS;
use crate::utils::notifications::{
    Notification, NotificationAction, NotificationContext, NotificationKind, ToastPhase,
};

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
    on_dismiss: Callback<u32>,
    on_remove: Callback<u32>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let Notification { id, kind, phase } = props.notification.clone();

    // One live timer per toast: the auto-dismiss while shown, the removal
    // while leaving. Moving to the next phase drops the previous timer, so a
    // manual close cancels the pending auto-dismiss.
    {
        let on_dismiss = props.on_dismiss.clone();
        let on_remove = props.on_remove.clone();
        let auto_dismiss_ms = kind.auto_dismiss_ms();
        use_effect_with_deps(
            move |phase: &ToastPhase| {
                let timer = match phase {
                    ToastPhase::Shown => Timeout::new(auto_dismiss_ms, move || on_dismiss.emit(id)),
                    ToastPhase::Leaving => Timeout::new(EXIT_ANIMATION_MS, move || on_remove.emit(id)),
                };
                move || drop(timer)
            },
            phase,
        );
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let animation = match phase {
        ToastPhase::Shown => "animation: slideInRight 0.5s ease;",
        ToastPhase::Leaving => "animation: slideOutRight 0.5s ease forwards;",
    };

    let body = match &kind {
        NotificationKind::Success => html! {
            <>
                <i class="fas fa-check-circle"></i>
                <span>{"Thank you! Your message has been sent successfully. We'll get back to you soon."}</span>
            </>
        },
        NotificationKind::Booking { title, price } => html! {
            <>
                <i class="fas fa-info-circle"></i>
                <div>
                    <strong>{format!("Selected Plan: {}", title)}</strong><br/>
                    <span>{format!("Price: \u{20b9}{}/month", price)}</span><br/>
                    <small>{"Please fill the form below to proceed with booking"}</small>
                </div>
            </>
        },
    };

    html! {
        <div class={classes!("notification", kind.class())} style={animation}>
            <div class="notification-content">
                { body }
                <button class="notification-close" onclick={on_close} aria-label="Close">{"\u{00d7}"}</button>
            </div>
        </div>
    }
}

/// Renders every queued notification, newest at the bottom of the stack.
#[function_component(NotificationHost)]
pub fn notification_host() -> Html {
    let queue = use_context::<NotificationContext>();
    let Some(queue) = queue else {
        log::warn!("NotificationHost rendered without a notification context");
        return html! {};
    };

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(NotificationAction::Dismiss(id)))
    };
    let on_remove = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(NotificationAction::Remove(id)))
    };

    html! {
        <div class="notification-stack">
            <style>
                {r#"
                    .notification-stack {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    }
                    .notification {
                        color: white;
                        padding: 20px;
                        border-radius: 12px;
                        max-width: 400px;
                    }
                    .success-notification {
                        background: linear-gradient(135deg, #4CAF50, #45a049);
                        box-shadow: 0 10px 30px rgba(76, 175, 80, 0.3);
                    }
                    .booking-notification {
                        background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
                        box-shadow: 0 10px 30px var(--shadow-medium);
                        max-width: 350px;
                    }
                    @keyframes slideInRight {
                        from { transform: translateX(100%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOutRight {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(100%); opacity: 0; }
                    }
                    .notification-content {
                        display: flex;
                        align-items: flex-start;
                        gap: 12px;
                    }
                    .notification-content i {
                        font-size: 1.2rem;
                        margin-top: 2px;
                        flex-shrink: 0;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.5rem;
                        cursor: pointer;
                        margin-left: auto;
                        flex-shrink: 0;
                        opacity: 0.8;
                        transition: opacity 0.2s ease;
                    }
                    .notification-close:hover {
                        opacity: 1;
                    }
                "#}
            </style>
            { for queue.items().iter().map(|notification| html! {
                <Toast
                    key={notification.id}
                    notification={notification.clone()}
                    on_dismiss={on_dismiss.clone()}
                    on_remove={on_remove.clone()}
                />
            }) }
        </div>
    }
}
