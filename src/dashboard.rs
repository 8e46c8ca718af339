use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::{ProjectRecord, grouped_number};

/// The single selected project, by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// Returns whether the selection changed. Re-selecting is a no-op.
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected.as_deref() == Some(id) {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStats {
    pub total_capacity_mw: f64,
    pub total_capacity_label: String,
    pub site_count: usize,
}

/// One row of the sidebar or mobile project list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: String,
    pub name: String,
    pub location: String,
    pub state_code: String,
    pub capacity_label: String,
    pub selected: bool,
}

/// Shell state: the catalog and the one selection everything else reads.
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Arc<Catalog>,
    selection: Selection,
    total_capacity_mw: f64,
}

impl Dashboard {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let total_capacity_mw = catalog.total_capacity_mw();
        Self {
            catalog,
            selection: Selection::default(),
            total_capacity_mw,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection.id()
    }

    pub fn selected_project(&self) -> Option<&ProjectRecord> {
        self.selection.id().and_then(|id| self.catalog.get(id))
    }

    /// Select a catalog project. Unknown ids leave the selection untouched.
    pub fn select_project(&mut self, id: &str) -> bool {
        if self.catalog.get(id).is_none() {
            log::warn!("Ignoring selection of unknown project {id}");
            return false;
        }
        let changed = self.selection.select(id);
        if changed {
            log::debug!("Selected project {id}");
        }
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        let changed = self.selection.clear();
        if changed {
            log::debug!("Selection cleared");
        }
        changed
    }

    pub fn total_capacity_mw(&self) -> f64 {
        self.total_capacity_mw
    }

    pub fn header(&self) -> HeaderStats {
        HeaderStats {
            total_capacity_mw: self.total_capacity_mw,
            total_capacity_label: format!("{} MW", grouped_number(self.total_capacity_mw)),
            site_count: self.catalog.len(),
        }
    }

    pub fn list_entries(&self) -> Vec<ListEntry> {
        self.catalog
            .projects()
            .iter()
            .map(|project| ListEntry {
                id: project.id.clone(),
                name: project.name.clone(),
                location: project.location.clone(),
                state_code: project.state_code.clone(),
                capacity_label: project.capacity_label(),
                selected: self.selection.is_selected(&project.id),
            })
            .collect()
    }
}
