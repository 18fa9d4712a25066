use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::{FilterButton, Plan, FILTER_HIDE_MS, FILTER_REVEAL_MS};
use crate::utils::plan_filter::{CardPhase, FilterAction, PlanFilterState};

#[derive(Properties, PartialEq)]
pub struct PlansProps {
    pub plans: Vec<Plan>,
    pub filters: Vec<FilterButton>,
    pub on_book: Callback<Plan>,
}

#[function_component(Plans)]
pub fn plans(props: &PlansProps) -> Html {
    let filter = {
        let categories: Vec<Vec<String>> = props.plans.iter().map(|p| p.categories.clone()).collect();
        use_reducer(move || PlanFilterState::new(Rc::new(categories)))
    };

    // Finish the fade of the latest selection. A newer selection drops these
    // timers before they fire.
    {
        let generation = filter.generation();
        let filter = filter.clone();
        use_effect_with_deps(
            move |generation: &u32| {
                let generation = *generation;
                let reveal = {
                    let filter = filter.clone();
                    Timeout::new(FILTER_REVEAL_MS, move || {
                        filter.dispatch(FilterAction::Reveal { generation })
                    })
                };
                let hide = Timeout::new(FILTER_HIDE_MS, move || {
                    filter.dispatch(FilterAction::Hide { generation })
                });
                move || {
                    drop(reveal);
                    drop(hide);
                }
            },
            generation,
        );
    }

    html! {
        <section id="plans" class="plans">
            <div class="container">
                <h2 class="section-title">{"Membership Plans"}</h2>
                <div class="plan-filters">
                    { for props.filters.iter().map(|button| {
                        let onclick = {
                            let filter = filter.clone();
                            let tag = button.tag.clone();
                            Callback::from(move |_: MouseEvent| filter.dispatch(FilterAction::Select(tag.clone())))
                        };
                        html! {
                            <button
                                class={classes!("filter-btn", filter.is_active(&button.tag).then_some("active"))}
                                data-filter={button.tag.clone()}
                                {onclick}
                            >
                                {&button.label}
                            </button>
                        }
                    }) }
                </div>
                <div class="plans-grid">
                    { for props.plans.iter().enumerate().map(|(i, plan)| {
                        render_plan_card(plan, filter.phase(i), props.on_book.clone())
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_plan_card(plan: &Plan, phase: CardPhase, on_book: Callback<Plan>) -> Html {
    let onclick = {
        let plan = plan.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_book.emit(plan.clone());
        })
    };
    let class = classes!("plan-card", plan.featured.then_some("featured"), plan.categories.clone());

    html! {
        <div {class} style={phase.style()} aria-hidden={(!phase.is_visible()).to_string()}>
            if plan.featured {
                <span class="plan-badge">{"Most popular"}</span>
            }
            <h3 class="plan-title">{&plan.title}</h3>
            <div class="plan-price">
                <span class="currency">{"₹"}</span>
                <span class="amount">{&plan.price}</span>
                <span class="period">{"/month"}</span>
            </div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li><i class="fas fa-check"></i>{" "}{feature}</li>
                }) }
            </ul>
            <a href="#contact" class="plan-btn" {onclick}>{"Book Now"}</a>
        </div>
    }
}
