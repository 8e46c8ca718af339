use iced::Size;

use crate::gui::components::{
    ComponentMessage, detail_card::DetailCard, map_view::MapView, project_list::ProjectList,
};

#[derive(Debug, Clone)]
pub enum Message {
    Map(ComponentMessage<MapView>),
    Card(ComponentMessage<DetailCard>),
    List(ComponentMessage<ProjectList>),
    WindowResized(Size),
}
