use serde::Deserialize;
use std::rc::Rc;
use yew::Reducible;

use super::cycle::CyclicIndex;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Prev,
    /// Raw keydown from the window; see [`LightboxState::action_for_key`].
    Key(String),
}

/// Modal image viewer over a gallery list captured once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct LightboxState {
    images: Rc<Vec<GalleryImage>>,
    index: CyclicIndex,
    open: bool,
}

impl LightboxState {
    pub fn new(images: Rc<Vec<GalleryImage>>) -> Self {
        let index = CyclicIndex::new(images.len());
        Self { images, index, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    /// Image on display, only while the modal is open.
    pub fn current(&self) -> Option<&GalleryImage> {
        self.open.then(|| self.image()).flatten()
    }

    /// Image the modal points at; kept after closing so the `<img>` does
    /// not flash empty during the close transition.
    pub fn image(&self) -> Option<&GalleryImage> {
        self.images.get(self.index.current())
    }

    /// Maps a keydown to an action. Keys are only interpreted while the
    /// modal is open.
    pub fn action_for_key(&self, key: &str) -> Option<LightboxAction> {
        if !self.open {
            return None;
        }
        match key {
            "Escape" => Some(LightboxAction::Close),
            "ArrowLeft" => Some(LightboxAction::Prev),
            "ArrowRight" => Some(LightboxAction::Next),
            _ => None,
        }
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let action = match action {
            LightboxAction::Key(key) => match self.action_for_key(&key) {
                Some(action) => action,
                None => return self,
            },
            action => action,
        };
        let mut next = (*self).clone();
        match action {
            LightboxAction::Open(position) => match self.index.jump(position) {
                Some(index) => {
                    next.index = index;
                    next.open = true;
                }
                None => return self,
            },
            LightboxAction::Close => next.open = false,
            LightboxAction::Next if self.open => next.index = self.index.next(),
            LightboxAction::Prev if self.open => next.index = self.index.prev(),
            LightboxAction::Next | LightboxAction::Prev | LightboxAction::Key(_) => return self,
        }
        Rc::new(next)
    }
}
