use crate::animals::Animal;

use super::view::{AnimalRow, PageView};
use super::filter::filter_animals;

/// Sequence number of an issued list fetch.
pub type LoadId = u64;

/// Which user action an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageError {
    pub operation: Operation,
    pub message: String,
}

/// Coarse state of the page, derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    LoadError,
    Submitting,
    SubmitError,
}

/// Everything the page keeps for one session. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub(crate) animals: Vec<Animal>,
    pub(crate) filter: String,
    pub(crate) new_name: String,
    pub(crate) loading: bool,
    pub(crate) submitting: bool,
    pub(crate) error: Option<PageError>,
    pub(crate) mounted: bool,
    pub(crate) loaded_once: bool,
    pub(crate) last_load: LoadId,
    pub(crate) reload_after_create: Option<LoadId>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            animals: Vec::new(),
            filter: String::new(),
            new_name: String::new(),
            // The first render already shows "Loading...".
            loading: true,
            submitting: false,
            error: None,
            mounted: false,
            loaded_once: false,
            last_load: 0,
            reload_after_create: None,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    pub fn page_error(&self) -> Option<&PageError> {
        self.error.as_ref()
    }

    pub fn last_load(&self) -> LoadId {
        self.last_load
    }

    pub fn phase(&self) -> Phase {
        if self.submitting {
            return Phase::Submitting;
        }
        if self.mounted && self.loading {
            return Phase::Loading;
        }
        match &self.error {
            Some(PageError {
                operation: Operation::Load,
                ..
            }) => Phase::LoadError,
            Some(PageError {
                operation: Operation::Create,
                ..
            }) => Phase::SubmitError,
            None if self.loaded_once => Phase::Loaded,
            None => Phase::Idle,
        }
    }

    /// Animals passing the current filter.
    pub fn visible(&self) -> Vec<&Animal> {
        filter_animals(&self.animals, &self.filter)
    }

    pub fn view(&self) -> PageView {
        let rows: Vec<AnimalRow> = self
            .visible()
            .into_iter()
            .map(|a| AnimalRow {
                id: a.id,
                name: a.name.clone(),
                added: a.added_display(),
            })
            .collect();

        PageView {
            count: rows.len(),
            show_empty: !self.loading && self.error.is_none() && rows.is_empty(),
            rows,
            filter: self.filter.clone(),
            new_name: self.new_name.clone(),
            loading: self.loading,
            error: self.error().map(ToOwned::to_owned),
            submit_label: if self.submitting { "Adding..." } else { "Add" },
            input_disabled: self.submitting,
        }
    }

    /// Start a list fetch: raise `loading`, clear the error, hand out an id.
    pub(crate) fn begin_load(&mut self) -> LoadId {
        self.loading = true;
        self.error = None;
        self.last_load += 1;
        self.last_load
    }

    pub(crate) fn fail(&mut self, operation: Operation, message: String) {
        self.error = Some(PageError { operation, message });
    }
}
