pub mod detail_card;
pub mod map_view;
pub mod project_list;

use iced::{Element, Task};

use crate::gui::AppState;

/// What a component emits: its own messages, or events for the shell.
#[derive(Debug, Clone)]
pub enum Event<M, P> {
    Local(M),
    Parent(P),
}

pub type ComponentMessage<C> = Event<<C as Component>::Message, <C as Component>::ParentMessage>;

/// A piece of the dashboard. Components read the shell state but never
/// write it; changes go up as parent messages.
pub trait Component: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ComponentMessage<Self>>;

    fn update(&mut self, message: Self::Message, state: &AppState) -> Task<ComponentMessage<Self>>;
}
