//! Contracts for the asset-browsing collaborators hosted next to the pager.
//!
//! The rich-text editor asks for an asset by calling an `AssetBrowser`; the
//! external picker reports back through a `PickerOutcome`. Neither is
//! implemented here, only the shape of the handoff.

/// Kind of asset the editor is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Image,
    Media,
    File,
}

impl AssetType {
    /// Parse the editor's asset type string. Unknown kinds are files.
    pub fn from_editor(s: &str) -> Self {
        match s {
            "image" => AssetType::Image,
            "media" => AssetType::Media,
            _ => AssetType::File,
        }
    }
}

/// An editor's request to browse for an asset.
#[derive(Debug, Clone)]
pub struct AssetRequest<W> {
    /// Form field that receives the chosen URL.
    pub field_name: String,
    /// URL currently in the field, if any.
    pub current_url: Option<String>,
    pub asset_type: AssetType,
    /// Window hosting the editor.
    pub host: W,
}

/// Browses for an asset on behalf of the editor.
///
/// Implementations must eventually call `on_done` once.
pub trait AssetBrowser<W> {
    fn browse(&mut self, request: AssetRequest<W>, on_done: Box<dyn FnOnce(PickerOutcome)>);
}

/// How a picker session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// The user picked exactly one asset.
    Chosen(String),
    Cancelled,
}

impl PickerOutcome {
    /// Build an outcome from the picker's selection list.
    ///
    /// Only the first URL is kept; an empty selection counts as cancelled.
    pub fn from_selection<I>(urls: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        match urls.into_iter().next() {
            Some(url) => PickerOutcome::Chosen(url.into()),
            None => PickerOutcome::Cancelled,
        }
    }

    /// Invoke exactly one of the callbacks.
    pub fn settle(self, on_chosen: impl FnOnce(String), on_restore: impl FnOnce()) {
        match self {
            PickerOutcome::Chosen(url) => on_chosen(url),
            PickerOutcome::Cancelled => on_restore(),
        }
    }
}
