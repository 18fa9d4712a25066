use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::utils::dom;
use crate::utils::scroll_spy::scroll_percent;

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let percent = use_state_eq(|| 0.0_f64);

    {
        let percent = percent.clone();
        use_event_with_window("scroll", move |_: Event| {
            let (scroll_height, viewport) = dom::document_extent();
            percent.set(scroll_percent(dom::scroll_y(), scroll_height, viewport));
        });
    }

    html! {
        <div class="scroll-progress" style={format!("width: {:.2}%;", *percent)}></div>
    }
}
