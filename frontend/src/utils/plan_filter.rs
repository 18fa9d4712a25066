use std::rc::Rc;
use yew::Reducible;

/// Filter tag that matches every card.
pub const ALL_TAG: &str = "all";

/// Where a plan card is in its show/hide transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    /// Back in the layout, about to fade/scale in.
    Entering,
    Shown,
    /// Fading/scaling out, still taking up space.
    Leaving,
    /// Out of the layout.
    Hidden,
}

impl CardPhase {
    pub fn style(self) -> &'static str {
        match self {
            CardPhase::Entering => "display: block; opacity: 0; transform: scale(0.8);",
            CardPhase::Shown => "display: block; opacity: 1; transform: scale(1);",
            CardPhase::Leaving => "display: block; opacity: 0; transform: scale(0.8);",
            CardPhase::Hidden => "display: none;",
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, CardPhase::Entering | CardPhase::Shown)
    }
}

pub fn card_matches(tag: &str, categories: &[String]) -> bool {
    tag == ALL_TAG || categories.iter().any(|c| c == tag)
}

pub enum FilterAction {
    Select(String),
    /// Entering cards finish fading in. Ignored unless `generation` is current.
    Reveal { generation: u32 },
    /// Leaving cards drop out of the layout. Ignored unless `generation` is current.
    Hide { generation: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanFilterState {
    active_tag: String,
    categories: Rc<Vec<Vec<String>>>,
    phases: Vec<CardPhase>,
    generation: u32,
}

impl PlanFilterState {
    pub fn new(categories: Rc<Vec<Vec<String>>>) -> Self {
        let phases = vec![CardPhase::Shown; categories.len()];
        Self {
            active_tag: ALL_TAG.to_string(),
            categories,
            phases,
            generation: 0,
        }
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active_tag == tag
    }

    pub fn phase(&self, card: usize) -> CardPhase {
        self.phases.get(card).copied().unwrap_or(CardPhase::Hidden)
    }

    /// Bumped on every selection; pending transition timers carry the
    /// generation they were scheduled for.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn settle(&self, from: CardPhase, to: CardPhase) -> Self {
        let mut next = self.clone();
        for phase in next.phases.iter_mut().filter(|p| **p == from) {
            *phase = to;
        }
        next
    }
}

impl Reducible for PlanFilterState {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FilterAction::Select(tag) => {
                let phases = self
                    .categories
                    .iter()
                    .zip(&self.phases)
                    .map(|(categories, phase)| match (card_matches(&tag, categories), phase) {
                        (true, CardPhase::Shown) => CardPhase::Shown,
                        (true, _) => CardPhase::Entering,
                        (false, CardPhase::Hidden) => CardPhase::Hidden,
                        (false, _) => CardPhase::Leaving,
                    })
                    .collect();
                log::debug!("Plan filter -> {}", tag);
                Rc::new(Self {
                    active_tag: tag,
                    categories: self.categories.clone(),
                    phases,
                    generation: self.generation.wrapping_add(1),
                })
            }
            FilterAction::Reveal { generation } if generation == self.generation => {
                Rc::new(self.settle(CardPhase::Entering, CardPhase::Shown))
            }
            FilterAction::Hide { generation } if generation == self.generation => {
                Rc::new(self.settle(CardPhase::Leaving, CardPhase::Hidden))
            }
            FilterAction::Reveal { .. } | FilterAction::Hide { .. } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plans() -> Rc<PlanFilterState> {
        let categories = vec![
            vec!["fitness".to_string()],
            vec!["fitness".to_string(), "yoga".to_string()],
            vec!["yoga".to_string()],
            vec!["training".to_string()],
        ];
        Rc::new(PlanFilterState::new(Rc::new(categories)))
    }

    fn settle(state: Rc<PlanFilterState>) -> Rc<PlanFilterState> {
        let generation = state.generation();
        state
            .reduce(FilterAction::Reveal { generation })
            .reduce(FilterAction::Hide { generation })
    }

    fn visible(state: &PlanFilterState) -> Vec<usize> {
        (0..4).filter(|i| state.phase(*i).is_visible()).collect()
    }

    #[test]
    fn all_cards_shown_initially() {
        let state = plans();
        assert!(state.is_active(ALL_TAG));
        assert_eq!(visible(&state), vec![0, 1, 2, 3]);
    }

    #[test]
    fn tag_reveals_exactly_matching_cards() {
        let state = settle(plans().reduce(FilterAction::Select("yoga".to_string())));
        assert_eq!(visible(&state), vec![1, 2]);
        assert_eq!(state.phase(0), CardPhase::Hidden);
        assert_eq!(state.phase(3), CardPhase::Hidden);
    }

    #[test]
    fn all_brings_every_card_back() {
        let state = settle(plans().reduce(FilterAction::Select("training".to_string())));
        let state = plans_after(state, ALL_TAG);
        assert!((0..4).all(|i| state.phase(i) == CardPhase::Shown));
    }

    fn plans_after(state: Rc<PlanFilterState>, tag: &str) -> Rc<PlanFilterState> {
        settle(state.reduce(FilterAction::Select(tag.to_string())))
    }

    #[test]
    fn hidden_cards_fade_in_through_entering() {
        let state = settle(plans().reduce(FilterAction::Select("training".to_string())));
        let state = state.reduce(FilterAction::Select("yoga".to_string()));
        assert_eq!(state.phase(2), CardPhase::Entering);
        assert_eq!(state.phase(3), CardPhase::Leaving);
    }

    #[test]
    fn leaving_cards_keep_layout_until_hide_fires() {
        let state = plans().reduce(FilterAction::Select("training".to_string()));
        assert_eq!(state.phase(0), CardPhase::Leaving);
        let generation = state.generation();
        let state = state.reduce(FilterAction::Hide { generation });
        assert_eq!(state.phase(0), CardPhase::Hidden);
    }

    #[test]
    fn stale_hide_does_not_touch_newer_selection() {
        let first = plans().reduce(FilterAction::Select("training".to_string()));
        let stale = first.generation();
        let second = first.reduce(FilterAction::Select(ALL_TAG.to_string()));
        let after = second.reduce(FilterAction::Hide { generation: stale });
        assert_eq!(visible(&after), vec![0, 1, 2, 3]);
    }

    #[test]
    fn exactly_one_filter_active() {
        let state = plans().reduce(FilterAction::Select("fitness".to_string()));
        let active: Vec<_> = [ALL_TAG, "fitness", "yoga", "training"]
            .into_iter()
            .filter(|tag| state.is_active(tag))
            .collect();
        assert_eq!(active, vec!["fitness"]);
    }
}
