use crate::models::ProjectRecord;

/// Shown when a project's own image cannot be loaded
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1509391366360-2e959784a276?auto=format&fit=crop&w=800&q=80";
pub const FALLBACK_OPACITY: f32 = 0.5;

pub const TECHNOLOGY_LABEL: &str = "Hikam Solar PV";
pub const GRID_STATUS: &str = "Connected";
pub const STATUS_BADGE: &str = "OPERATIONAL";

/// Per-card state that survives re-renders of the same project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    project_id: Option<String>,
    image_failed: bool,
}

impl CardState {
    /// Follow the shown project. Returns `true` when its identity changed,
    /// in which case the image failure flag is reset.
    pub fn sync(&mut self, project: Option<&ProjectRecord>) -> bool {
        let id = project.map(|p| p.id.as_str());
        if self.project_id.as_deref() == id {
            return false;
        }
        self.project_id = id.map(str::to_string);
        self.image_failed = false;
        true
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Record a load error for `project_id`; stale reports are ignored.
    pub fn mark_image_failed(&mut self, project_id: &str) -> bool {
        if self.project_id.as_deref() != Some(project_id) {
            return false;
        }
        self.image_failed = true;
        true
    }

    pub fn image_failed(&self) -> bool {
        self.image_failed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardImage {
    Primary { url: String },
    Fallback { url: String, notice: String },
}

impl CardImage {
    pub fn url(&self) -> &str {
        match self {
            CardImage::Primary { url } | CardImage::Fallback { url, .. } => url,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CardImage::Fallback { .. })
    }
}

/// Text and image content of the detail card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub project_id: String,
    pub title: String,
    pub location: String,
    pub capacity: String,
    pub capacity_unit: &'static str,
    pub technology: &'static str,
    pub grid: &'static str,
    pub status: &'static str,
    pub image: CardImage,
}

/// `None` when nothing is selected; the card then draws nothing at all.
pub fn present(project: Option<&ProjectRecord>, state: &CardState) -> Option<CardView> {
    let project = project?;
    let failed = state.image_failed() && state.project_id() == Some(project.id.as_str());
    let image = if failed {
        CardImage::Fallback {
            url: FALLBACK_IMAGE_URL.to_string(),
            notice: format!("Image not found: {}", project.image_url),
        }
    } else {
        CardImage::Primary {
            url: project.image_url.clone(),
        }
    };

    Some(CardView {
        project_id: project.id.clone(),
        title: project.name.clone(),
        location: project.location.clone(),
        capacity: crate::models::display_number(project.capacity_mw),
        capacity_unit: "MW",
        technology: TECHNOLOGY_LABEL,
        grid: GRID_STATUS,
        status: STATUS_BADGE,
        image,
    })
}
