use std::sync::Arc;

use iced::{
    Element, Length, Size, Subscription, Task, event,
    widget::{container, stack},
    window,
};

use super::components::{
    Component, Event,
    detail_card::{CardParentMessage, DetailCard},
    map_view::{MapParentMessage, MapView},
    project_list::{ProjectList, ProjectListParentMessage},
};
use super::{AppState, Message, widgets};
use crate::catalog::Catalog;
use crate::config::AppConfig;

pub struct SolarMapApp {
    state: AppState,
    map: MapView,
    card: DetailCard,
    list: ProjectList,
}

impl SolarMapApp {
    pub fn new(
        config: AppConfig,
        catalog: Arc<Catalog>,
        window_width: f64,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::new(catalog, window_width),
            map: MapView::new(config.topology),
            card: DetailCard::default(),
            list: ProjectList,
        };

        let mut tasks = vec![app.map.load().map(Message::Map)];
        if let Some(id) = config.initial_selection {
            tasks.push(app.select(&id));
        }
        (app, Task::batch(tasks))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn title(&self) -> String {
        match self.state.dashboard.selected_project() {
            Some(project) => format!("Solar Project Map - {}", project.name),
            None => "Solar Project Map".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Map(Event::Local(message)) => {
                self.map.update(message, &self.state).map(Message::Map)
            }
            Message::Map(Event::Parent(MapParentMessage::SelectProject(id))) => self.select(&id),
            Message::List(Event::Local(never)) => match never {},
            Message::List(Event::Parent(ProjectListParentMessage::SelectProject(id))) => {
                self.select(&id)
            }
            Message::Card(Event::Local(message)) => {
                self.card.update(message, &self.state).map(Message::Card)
            }
            Message::Card(Event::Parent(CardParentMessage::Close)) => self.clear_selection(),
            Message::WindowResized(size) => {
                self.state.window_width = f64::from(size.width);
                Task::none()
            }
        }
    }

    fn select(&mut self, id: &str) -> Task<Message> {
        if !self.state.dashboard.select_project(id) {
            return Task::none();
        }
        self.map.invalidate();
        self.card
            .show(self.state.dashboard.selected_project())
            .map(Message::Card)
    }

    fn clear_selection(&mut self) -> Task<Message> {
        if !self.state.dashboard.clear_selection() {
            return Task::none();
        }
        self.map.invalidate();
        self.card.show(None).map(Message::Card)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header =
            widgets::header(&self.state.dashboard.header(), self.state.shows_header_stats());
        let list = self.list.view(&self.state).map(Message::List);
        let map = self.map.view(&self.state).map(Message::Map);
        let card = self.card.view(&self.state).map(Message::Card);

        let main_content = stack![
            map,
            container(card)
                .align_right(Length::Fill)
                .align_top(Length::Fill)
                .padding(24),
        ];
        widgets::layout(header, list, main_content, self.state.layout_mode())
    }

    /// Tracks the real window size, starting with the size it opened at.
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _id| window_size(&event).map(Message::WindowResized))
    }
}

/// Size reported by a window opening or being resized.
pub fn window_size(event: &iced::Event) -> Option<Size> {
    match event {
        iced::Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(*size)
        }
        _ => None,
    }
}
