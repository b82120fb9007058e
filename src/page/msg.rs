use crate::animals::{Animal, FetchError};

use super::state::LoadId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// First render of the page. Only the first one loads.
    Mounted,
    /// User clicked Refresh.
    RefreshClicked,
    /// User edited the filter box.
    FilterChanged(String),
    /// User edited the new-name box.
    NewNameChanged(String),
    /// User submitted the create form.
    Submitted,
    /// A list fetch issued as `load` completed.
    LoadFinished {
        load: LoadId,
        result: Result<Vec<Animal>, FetchError>,
    },
    /// The create request completed.
    CreateFinished(Result<(), FetchError>),
}
