use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, row, scrollable, text},
};

use crate::core::{LayoutMode, palette};
use crate::gui::{
    AppState,
    components::{Component, ComponentMessage, Event},
    widgets::{self, MOBILE_ROW_WIDTH},
};

/// Every catalog project as a clickable row: a sidebar on desktop, a
/// horizontal strip on narrow windows.
#[derive(Debug, Clone, Default)]
pub struct ProjectList;

#[derive(Debug, Clone)]
pub enum ProjectListParentMessage {
    SelectProject(String),
}

impl Component for ProjectList {
    type Message = Infallible;
    type ParentMessage = ProjectListParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ComponentMessage<Self>> {
        let entries = state.dashboard.list_entries();
        let select =
            |id: &str| Event::Parent(ProjectListParentMessage::SelectProject(id.to_string()));

        match state.layout_mode() {
            LayoutMode::Desktop => {
                let rows = entries.iter().map(|entry| {
                    button(widgets::entry_card(entry))
                        .on_press(select(&entry.id))
                        .padding(16)
                        .width(Length::Fill)
                        .style(widgets::list_row(entry.selected))
                        .into()
                });
                scrollable(
                    column![
                        text("Project Locations").size(18).font(widgets::bold()),
                        Column::with_children(rows).spacing(12),
                    ]
                    .spacing(16)
                    .padding(24),
                )
                .height(Length::Fill)
                .into()
            }
            LayoutMode::Mobile => {
                let rows = entries.iter().map(|entry| {
                    button(
                        column![
                            text(entry.name.clone()).font(widgets::bold()),
                            row![
                                text(entry.state_code.clone())
                                    .size(12)
                                    .color(widgets::color(palette::MUTED_TEXT))
                                    .width(Length::Fill),
                                text(entry.capacity_label.clone())
                                    .size(12)
                                    .font(widgets::bold())
                                    .color(widgets::color(palette::ACTIVE_REGION)),
                            ],
                        ]
                        .spacing(4),
                    )
                    .on_press(select(&entry.id))
                    .padding(12)
                    .width(Length::Fixed(MOBILE_ROW_WIDTH))
                    .style(widgets::list_row(entry.selected))
                    .into()
                });
                scrollable(Row::with_children(rows).spacing(16))
                    .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::default()))
                    .width(Length::Fill)
                    .into()
            }
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &AppState,
    ) -> Task<ComponentMessage<Self>> {
        match message {}
    }
}
