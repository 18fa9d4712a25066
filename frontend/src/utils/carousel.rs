use std::rc::Rc;
use yew::Reducible;

use super::cycle::CyclicIndex;

pub enum CarouselAction {
    /// Fired by the autoplay interval. Behaves exactly like `Next`.
    Tick,
    Next,
    Prev,
    Jump(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    index: CyclicIndex,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: CyclicIndex::new(len) }
    }

    pub fn current(&self) -> usize {
        self.index.current()
    }

    pub fn is_active(&self, position: usize) -> bool {
        !self.index.is_empty() && position == self.index.current()
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let index = match action {
            CarouselAction::Tick | CarouselAction::Next => self.index.next(),
            CarouselAction::Prev => self.index.prev(),
            CarouselAction::Jump(to) => match self.index.jump(to) {
                Some(index) => index,
                None => {
                    log::warn!("Ignoring jump to testimonial {} of {}", to, self.index.len());
                    return self;
                }
            },
        };
        Rc::new(Self { index })
    }
}
