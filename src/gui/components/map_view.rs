use std::sync::Arc;

use geo::Coord;
use iced::{
    Alignment::Center,
    Element, Length, Pixels, Point, Rectangle, Renderer, Size, Task, Theme, Vector, mouse,
    widget::{
        button, canvas,
        canvas::{Frame, Geometry, Path, Stroke},
        column, container, stack, text,
    },
};

use crate::core::palette;
use crate::core::scene::{self, LABEL_SIZE, MapScene, RegionShape, Scene, SceneInput};
use crate::core::{Dimensions, Geography, TopologySource};
use crate::dashboard::Dashboard;
use crate::gui::{
    AppState,
    components::{Component, ComponentMessage, Event},
    widgets,
};

#[derive(Debug, Clone)]
pub enum GeographyStatus {
    Loading,
    Ready(Arc<Geography>),
    Failed(String),
}

/// US map with a marker per project. Owns the topology once it is loaded.
pub struct MapView {
    source: TopologySource,
    status: GeographyStatus,
    cache: canvas::Cache,
}

#[derive(Debug, Clone)]
pub enum MapMessage {
    GeographyLoaded(Result<Arc<Geography>, String>),
    Retry,
}

#[derive(Debug, Clone)]
pub enum MapParentMessage {
    SelectProject(String),
}

impl MapView {
    pub fn new(source: TopologySource) -> Self {
        Self {
            source,
            status: GeographyStatus::Loading,
            cache: canvas::Cache::new(),
        }
    }

    /// The one topology request of the session.
    pub fn load(&self) -> Task<ComponentMessage<Self>> {
        Task::perform(self.source.clone().load(), |result| {
            Event::Local(MapMessage::GeographyLoaded(
                result.map(Arc::new).map_err(|e| e.to_string()),
            ))
        })
    }

    pub fn geography(&self) -> Option<&Geography> {
        match &self.status {
            GeographyStatus::Ready(geography) => Some(geography),
            _ => None,
        }
    }

    fn failure(&self) -> Option<&str> {
        match &self.status {
            GeographyStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Drop the cached drawing; the next frame is rendered from scratch.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    fn loading_overlay<'a>(&'a self) -> Element<'a, ComponentMessage<Self>> {
        let mut content =
            column![text("Loading Topology...").color(widgets::color(palette::ACTIVE_REGION))]
                .spacing(8)
                .align_x(Center);
        if let Some(error) = self.failure() {
            content = content
                .push(text(format!("Map data unavailable: {error}")).size(12))
                .push(button(text("Retry").size(13)).on_press(Event::Local(MapMessage::Retry)));
        }
        container(content)
            .center(Length::Fill)
            .style(widgets::overlay)
            .into()
    }
}

impl Component for MapView {
    type Message = MapMessage;
    type ParentMessage = MapParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ComponentMessage<Self>> {
        let map = canvas(MapCanvas {
            geography: self.geography(),
            dashboard: &state.dashboard,
            cache: &self.cache,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = stack![
            map,
            container(widgets::legend())
                .align_left(Length::Fill)
                .align_bottom(Length::Fill)
                .padding(16),
        ];
        if self.geography().is_none() {
            layers = layers.push(self.loading_overlay());
        }

        container(layers)
            .padding(8)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(widgets::panel)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &AppState,
    ) -> Task<ComponentMessage<Self>> {
        match message {
            MapMessage::GeographyLoaded(Ok(geography)) => {
                log::info!("Map topology loaded with {} regions", geography.len());
                self.status = GeographyStatus::Ready(geography);
                self.invalidate();
                Task::none()
            }
            MapMessage::GeographyLoaded(Err(error)) => {
                log::error!("Failed to load map topology: {error}");
                self.status = GeographyStatus::Failed(error);
                Task::none()
            }
            MapMessage::Retry => {
                log::info!("Retrying topology load from {}", self.source);
                self.status = GeographyStatus::Loading;
                self.load()
            }
        }
    }
}

/// Where the map sits inside the canvas bounds.
#[derive(Debug, Clone, Copy)]
struct MapFrame {
    dimensions: Dimensions,
    offset_y: f64,
}

impl MapFrame {
    fn new(bounds: Size) -> Self {
        let dimensions = Dimensions::from_container_width(f64::from(bounds.width));
        let offset_y = ((f64::from(bounds.height) - dimensions.height) / 2.0).max(0.0);
        Self {
            dimensions,
            offset_y,
        }
    }

    fn to_map(&self, position: Point) -> Coord<f64> {
        Coord {
            x: f64::from(position.x),
            y: f64::from(position.y) - self.offset_y,
        }
    }
}

#[derive(Debug, Default)]
struct Interaction {
    hovered_region: Option<String>,
    over_marker: bool,
    /// Projected regions for hover lookups, rebuilt when the size changes
    regions: Option<(Dimensions, Vec<RegionShape>)>,
}

struct MapCanvas<'a> {
    geography: Option<&'a Geography>,
    dashboard: &'a Dashboard,
    cache: &'a canvas::Cache,
}

impl MapCanvas<'_> {
    fn hovered_region(
        &self,
        interaction: &mut Interaction,
        frame: MapFrame,
        point: Coord<f64>,
    ) -> Option<String> {
        let geography = self.geography?;
        let stale = !matches!(
            &interaction.regions,
            Some((dimensions, _)) if *dimensions == frame.dimensions
        );
        if stale {
            let regions =
                scene::render_regions(self.dashboard.catalog(), geography, frame.dimensions)
                    .inspect_err(|e| log::error!("Failed to project regions: {e}"))
                    .ok()?;
            interaction.regions = Some((frame.dimensions, regions));
        }
        let (_, regions) = interaction.regions.as_ref()?;
        scene::region_at(regions, point).map(|region| region.name.clone())
    }
}

impl canvas::Program<ComponentMessage<MapView>> for MapCanvas<'_> {
    type State = Interaction;

    fn update(
        &self,
        interaction: &mut Interaction,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<ComponentMessage<MapView>>> {
        self.geography?;
        let Some(position) = cursor.position_in(bounds) else {
            if interaction.hovered_region.take().is_some() || interaction.over_marker {
                interaction.over_marker = false;
                return Some(canvas::Action::request_redraw());
            }
            return None;
        };
        let frame = MapFrame::new(bounds.size());
        let point = frame.to_map(position);
        let markers = scene::render_markers(
            self.dashboard.catalog(),
            frame.dimensions,
            self.dashboard.selected_id(),
        )
        .inspect_err(|e| log::error!("Failed to project markers: {e}"))
        .ok()?;
        let marker = markers.iter().rev().find(|marker| marker.hit(point));

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let marker = marker?;
                Some(
                    canvas::Action::publish(Event::Parent(MapParentMessage::SelectProject(
                        marker.project_id.clone(),
                    )))
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let over_marker = marker.is_some();
                let hovered = if over_marker {
                    None
                } else {
                    self.hovered_region(interaction, frame, point)
                };
                if hovered != interaction.hovered_region || over_marker != interaction.over_marker {
                    interaction.hovered_region = hovered;
                    interaction.over_marker = over_marker;
                    Some(canvas::Action::request_redraw())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        interaction: &Interaction,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(geography) = self.geography else {
            return Vec::new();
        };
        let map_frame = MapFrame::new(bounds.size());

        let map = self.cache.draw(renderer, bounds.size(), |frame| {
            let scene = scene::render(&SceneInput {
                catalog: self.dashboard.catalog(),
                geography: Some(geography),
                dimensions: map_frame.dimensions,
                selected: self.dashboard.selected_id(),
                failure: None,
            });
            match &scene {
                Ok(Scene::Map(map)) => {
                    frame.translate(Vector::new(0.0, map_frame.offset_y as f32));
                    paint_map(frame, map);
                }
                Ok(Scene::Loading { .. }) => {}
                Err(e) => log::error!("Failed to render map: {e}"),
            }
        });

        let mut layers = vec![map];
        if let (Some(name), Some(position)) =
            (&interaction.hovered_region, cursor.position_in(bounds))
        {
            let mut frame = Frame::new(renderer, bounds.size());
            paint_tooltip(&mut frame, name, position);
            layers.push(frame.into_geometry());
        }
        layers
    }

    fn mouse_interaction(
        &self,
        interaction: &Interaction,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.over_marker {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::None
        }
    }
}

fn point(c: Coord<f64>) -> Point {
    Point::new(c.x as f32, c.y as f32)
}

fn paint_map(frame: &mut Frame, map: &MapScene) {
    for region in &map.regions {
        let path = Path::new(|builder| {
            for polygon in &region.shape.0 {
                for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                    let mut coords = ring.0.iter();
                    if let Some(first) = coords.next() {
                        builder.move_to(point(*first));
                        for c in coords {
                            builder.line_to(point(*c));
                        }
                        builder.close();
                    }
                }
            }
        });
        frame.fill(&path, widgets::color(region.fill));
        frame.stroke(
            &path,
            Stroke::default()
                .with_color(widgets::color(palette::REGION_STROKE))
                .with_width(palette::REGION_STROKE_WIDTH as f32),
        );
    }

    for marker in &map.markers {
        let center = point(marker.position);
        if let Some(halo) = marker.halo_radius {
            frame.fill(&Path::circle(center, halo as f32), widgets::color(palette::MARKER_HALO));
        }
        let dot = Path::circle(center, marker.radius as f32);
        frame.fill(&dot, widgets::color(palette::MARKER_FILL));
        frame.stroke(
            &dot,
            Stroke::default()
                .with_color(widgets::color(palette::MARKER_STROKE))
                .with_width(palette::MARKER_STROKE_WIDTH as f32),
        );
        if let Some(label) = &marker.label {
            frame.fill_text(canvas::Text {
                content: label.text.clone(),
                // Label position is the text baseline
                position: Point::new(
                    label.position.x as f32,
                    (label.position.y - LABEL_SIZE) as f32,
                ),
                color: widgets::color(palette::MARKER_LABEL),
                size: Pixels(LABEL_SIZE as f32),
                font: widgets::bold(),
                ..canvas::Text::default()
            });
        }
    }
}

fn paint_tooltip(frame: &mut Frame, name: &str, cursor: Point) {
    let size = Size::new(name.chars().count() as f32 * 7.0 + 16.0, 24.0);
    let origin = Point::new(cursor.x + 14.0, cursor.y + 14.0);
    frame.fill(
        &Path::rectangle(origin, size),
        iced::Color::from_rgba8(0x0f, 0x17, 0x2a, 0.85),
    );
    frame.fill_text(canvas::Text {
        content: name.to_string(),
        position: Point::new(origin.x + 8.0, origin.y + 5.0),
        color: iced::Color::WHITE,
        size: Pixels(12.0),
        ..canvas::Text::default()
    });
}
