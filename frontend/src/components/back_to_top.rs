use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::BACK_TO_TOP_PX;
use crate::utils::dom;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            visible.set(dom::scroll_y() > BACK_TO_TOP_PX);
        });
    }

    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to(0.0));

    html! {
        <button
            id="back-to-top"
            class={classes!("back-to-top", (*visible).then_some("visible"))}
            aria-label="Back to top"
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
