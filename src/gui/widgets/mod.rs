use iced::{
    Alignment::Center,
    Background, Border, Color, Element, Font, Length, Theme, border, font,
    widget::{button, column, container, container::Style, row, text},
};

use crate::core::palette;
use crate::core::viewport::LayoutMode;
use crate::dashboard::{HeaderStats, ListEntry};

pub const SIDEBAR_WIDTH: f32 = 360.0;
pub const MOBILE_ROW_WIDTH: f32 = 256.0;

pub fn color(c: palette::Color) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}

pub fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

pub fn panel(_theme: &Theme) -> Style {
    Style::default()
        .background(Color::WHITE)
        .border(border::rounded(16.0).color(Color::from_rgb8(0xdb, 0xea, 0xfe)).width(1.0))
}

pub fn overlay(_theme: &Theme) -> Style {
    Style::default()
        .background(Color::from_rgba8(0xef, 0xf6, 0xff, 0.8))
        .border(border::rounded(12.0))
}

pub fn badge(_theme: &Theme) -> Style {
    Style::default()
        .background(Color::from_rgb8(0xf0, 0xfd, 0xf4))
        .border(border::rounded(999.0).color(Color::from_rgb8(0xdc, 0xfc, 0xe7)).width(1.0))
}

/// Row style for the project lists; the selected project is highlighted
pub fn list_row(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = button::secondary(theme, status);
        let (background, edge) = if selected {
            (palette::SELECTED_ROW, palette::SELECTED_BORDER)
        } else {
            (palette::ROW_BACKGROUND, palette::ROW_BORDER)
        };
        let edge = match status {
            button::Status::Hovered if !selected => Color::from_rgb8(0xbf, 0xdb, 0xfe),
            _ => color(edge),
        };
        button::Style {
            background: Some(Background::Color(color(background))),
            text_color: Color::from_rgb8(0x33, 0x41, 0x55),
            border: Border::default().rounded(12.0).color(edge).width(1.0),
            ..base
        }
    }
}

/// Capacity and site totals, right-aligned.
pub fn header<'a, Message: 'a>(stats: &HeaderStats, show_stats: bool) -> Element<'a, Message> {
    let stat = |caption: &'static str, value: String| {
        column![
            text(caption).size(11).color(color(palette::MUTED_TEXT)),
            text(value).size(18).font(bold()).color(color(palette::ACTIVE_REGION)),
        ]
        .align_x(iced::Alignment::End)
    };

    let content: Element<'a, Message> = if show_stats {
        row![
            stat("TOTAL CAPACITY", stats.total_capacity_label.clone()),
            stat("ACTIVE SITES", stats.site_count.to_string()),
        ]
        .spacing(32)
        .into()
    } else {
        row![].into()
    };

    container(content)
        .padding([12, 24])
        .height(Length::Fixed(64.0))
        .align_right(Length::Fill)
        .center_y(Length::Fixed(64.0))
        .style(|_theme: &Theme| Style::default().background(Color::WHITE))
        .into()
}

/// Sidebar row contents shared by the desktop list.
pub fn entry_card<'a, Message: 'a>(entry: &ListEntry) -> Element<'a, Message> {
    row![
        column![
            text(entry.name.clone()).font(bold()).color(if entry.selected {
                color(palette::ACTIVE_REGION)
            } else {
                Color::from_rgb8(0x33, 0x41, 0x55)
            }),
            text(entry.location.clone()).size(13).color(color(palette::MUTED_TEXT)),
        ]
        .spacing(4)
        .width(Length::Fill),
        container(
            text(entry.capacity_label.clone())
                .size(12)
                .font(bold())
                .color(color(palette::ACTIVE_REGION)),
        )
        .padding([4, 8])
        .style(|_theme: &Theme| {
            Style::default()
                .background(Color::WHITE)
                .border(border::rounded(4.0).color(color(palette::ROW_BORDER)).width(1.0))
        }),
    ]
    .align_y(Center)
    .into()
}

/// Colour key drawn over the map corner.
pub fn legend<'a, Message: 'a>() -> Element<'a, Message> {
    let swatch = |c: palette::Color| {
        container(text(""))
            .width(Length::Fixed(12.0))
            .height(Length::Fixed(12.0))
            .style(move |_theme: &Theme| {
                Style::default()
                    .background(color(c))
                    .border(border::rounded(6.0))
            })
    };
    container(
        column![
            row![swatch(palette::ACTIVE_REGION), text("Active Presence").size(13)]
                .spacing(8)
                .align_y(Center),
            row![swatch(palette::INACTIVE_REGION), text("No Operations").size(13)]
                .spacing(8)
                .align_y(Center),
        ]
        .spacing(8),
    )
    .padding(12)
    .style(|_theme: &Theme| {
        Style::default()
            .background(Color::from_rgba8(0xff, 0xff, 0xff, 0.9))
            .border(border::rounded(12.0).color(Color::from_rgb8(0xdb, 0xea, 0xfe)).width(1.0))
    })
    .into()
}

/// Page frame: header on top, then the sidebar beside the map on desktop or
/// the project strip under it on narrow windows.
pub fn layout<'a, Message>(
    header: impl Into<Element<'a, Message>>,
    list: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
    mode: LayoutMode,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let body: Element<'a, Message> = match mode {
        LayoutMode::Desktop => row![
            container(list.into())
                .width(Length::Fixed(SIDEBAR_WIDTH))
                .height(Length::Fill)
                .style(|_theme: &Theme| Style::default().background(Color::WHITE)),
            container(main_content.into())
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24),
        ]
        .into(),
        LayoutMode::Mobile => column![
            container(main_content.into())
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(12),
            container(list.into())
                .width(Length::Fill)
                .padding(12)
                .style(|_theme: &Theme| Style::default().background(Color::WHITE)),
        ]
        .into(),
    };

    container(column![header.into(), body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| Style::default().background(Color::from_rgb8(0xf8, 0xfa, 0xfc)))
        .into()
}
