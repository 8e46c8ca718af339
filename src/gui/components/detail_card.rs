use iced::{
    Alignment::Center,
    ContentFit, Element, Length, Task, Theme,
    widget::{
        button, column, container, container::Style, image as picture, opaque, row, stack, text,
    },
};

use crate::core::card::{
    self, CardImage, CardState, CardView, FALLBACK_IMAGE_URL, FALLBACK_OPACITY,
};
use crate::core::{imagery, palette};
use crate::gui::{
    AppState,
    components::{Component, ComponentMessage, Event},
    widgets,
};
use crate::models::ProjectRecord;

pub const CARD_WIDTH: f32 = 384.0;
const IMAGE_HEIGHT: f32 = 192.0;

/// Floating card with the selected project's details.
#[derive(Debug, Clone, Default)]
pub struct DetailCard {
    state: CardState,
    primary: Option<picture::Handle>,
    fallback: Option<picture::Handle>,
    fallback_requested: bool,
}

#[derive(Debug, Clone)]
pub enum CardMessage {
    ImageLoaded {
        project_id: String,
        result: Result<picture::Handle, String>,
    },
    FallbackLoaded(Result<picture::Handle, String>),
}

#[derive(Debug, Clone)]
pub enum CardParentMessage {
    Close,
}

async fn fetch_handle(location: String) -> Result<picture::Handle, String> {
    let rgba = imagery::load_image(&location).await.map_err(|e| e.to_string())?;
    let (width, height) = rgba.dimensions();
    Ok(picture::Handle::from_rgba(width, height, rgba.into_raw()))
}

impl DetailCard {
    /// Point the card at `project`. A new project starts with a fresh
    /// image request and a cleared failure flag.
    pub fn show(&mut self, project: Option<&ProjectRecord>) -> Task<ComponentMessage<Self>> {
        if !self.state.sync(project) {
            return Task::none();
        }
        self.primary = None;
        let Some(project) = project else {
            return Task::none();
        };

        let project_id = project.id.clone();
        Task::perform(fetch_handle(project.image_url.clone()), move |result| {
            Event::Local(CardMessage::ImageLoaded { project_id, result })
        })
    }

    fn load_fallback(&mut self) -> Task<ComponentMessage<Self>> {
        if self.fallback.is_some() || self.fallback_requested {
            return Task::none();
        }
        self.fallback_requested = true;
        Task::perform(fetch_handle(FALLBACK_IMAGE_URL.to_string()), |result| {
            Event::Local(CardMessage::FallbackLoaded(result))
        })
    }

    fn image_area<'a>(&'a self, view: &CardView) -> Element<'a, ComponentMessage<Self>> {
        let placeholder = |caption: &'static str| {
            container(text(caption).size(12).color(widgets::color(palette::MUTED_TEXT)))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(IMAGE_HEIGHT))
                .style(|_theme: &Theme| {
                    Style::default().background(iced::Color::from_rgb8(0xf1, 0xf5, 0xf9))
                })
        };

        let backdrop: Element<'a, ComponentMessage<Self>> =
            match (&view.image, &self.primary, &self.fallback) {
                (CardImage::Primary { .. }, Some(handle), _) => picture(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(IMAGE_HEIGHT))
                    .content_fit(ContentFit::Cover)
                    .into(),
                (CardImage::Fallback { .. }, _, Some(handle)) => picture(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(IMAGE_HEIGHT))
                    .content_fit(ContentFit::Cover)
                    .opacity(FALLBACK_OPACITY)
                    .into(),
                _ => placeholder("Loading image...").into(),
            };

        let mut layers = stack![backdrop];
        if let CardImage::Fallback { notice, .. } = &view.image {
            layers = layers.push(
                container(
                    container(text(notice.clone()).size(12).color(iced::Color::WHITE))
                        .padding([4, 8])
                        .style(|_theme: &Theme| {
                            Style::default()
                                .background(iced::Color::from_rgba8(0x0f, 0x17, 0x2a, 0.6))
                                .border(iced::border::rounded(4.0))
                        }),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fixed(IMAGE_HEIGHT)),
            );
        }

        let title = container(
            text(view.title.clone())
                .size(20)
                .font(widgets::bold())
                .color(iced::Color::WHITE),
        )
        .padding(16)
        .width(Length::Fill)
        .style(|_theme: &Theme| {
            Style::default().background(iced::Color::from_rgba8(0x0f, 0x17, 0x2a, 0.55))
        });
        let close = button(text("✕").size(14))
            .on_press(Event::Parent(CardParentMessage::Close))
            .padding([4, 10])
            .style(|theme: &Theme, status| button::Style {
                border: iced::border::rounded(999.0),
                ..button::secondary(theme, status)
            });

        layers
            .push(container(title).align_bottom(Length::Fixed(IMAGE_HEIGHT)))
            .push(container(close).align_right(Length::Fill).padding(12))
            .height(Length::Fixed(IMAGE_HEIGHT))
            .into()
    }
}

fn field<'a, Message: 'a>(caption: &'static str, value: &'static str) -> Element<'a, Message> {
    column![
        text(caption).size(11).color(widgets::color(palette::MUTED_TEXT)),
        text(value).size(14).font(widgets::bold()),
    ]
    .spacing(2)
    .width(Length::Fill)
    .into()
}

impl Component for DetailCard {
    type Message = CardMessage;
    type ParentMessage = CardParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ComponentMessage<Self>> {
        let Some(view) = card::present(state.dashboard.selected_project(), &self.state) else {
            return column![].into();
        };

        let capacity = row![
            text(view.capacity.clone())
                .size(30)
                .font(widgets::bold())
                .color(widgets::color(palette::ACTIVE_REGION)),
            text(view.capacity_unit).size(16).color(widgets::color(palette::MUTED_TEXT)),
        ]
        .spacing(6)
        .align_y(Center);

        let status = row![
            text("STATUS").size(11).color(widgets::color(palette::MUTED_TEXT)).width(Length::Fill),
            container(
                text(view.status)
                    .size(11)
                    .font(widgets::bold())
                    .color(widgets::color(palette::STATUS_GREEN)),
            )
            .padding([2, 8])
            .style(widgets::badge),
        ]
        .align_y(Center);

        let body = column![
            text(view.location.clone()).size(13).color(widgets::color(palette::MUTED_TEXT)),
            capacity,
            status,
            row![field("Technology", view.technology), field("Grid", view.grid)].spacing(16),
        ]
        .spacing(12)
        .padding(20);

        opaque(
            container(column![self.image_area(&view), body])
                .width(Length::Fixed(CARD_WIDTH))
                .style(|_theme: &Theme| {
                    Style::default().background(iced::Color::WHITE).border(
                        iced::border::rounded(16.0)
                            .color(widgets::color(palette::MARKER_FILL))
                            .width(2.0),
                    )
                }),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &AppState,
    ) -> Task<ComponentMessage<Self>> {
        match message {
            CardMessage::ImageLoaded { project_id, result } => {
                if self.state.project_id() != Some(project_id.as_str()) {
                    log::debug!("Dropping stale image result for {project_id}");
                    return Task::none();
                }
                match result {
                    Ok(handle) => {
                        self.primary = Some(handle);
                        Task::none()
                    }
                    Err(error) => {
                        log::warn!("Image for {project_id} failed to load: {error}");
                        self.state.mark_image_failed(&project_id);
                        self.load_fallback()
                    }
                }
            }
            CardMessage::FallbackLoaded(Ok(handle)) => {
                self.fallback = Some(handle);
                Task::none()
            }
            CardMessage::FallbackLoaded(Err(error)) => {
                log::warn!("Fallback image failed to load: {error}");
                self.fallback_requested = false;
                Task::none()
            }
        }
    }
}
