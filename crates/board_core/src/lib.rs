//! Session state for the job board: dataset, filters, contacted flags, the shared
//! selection, and the projections the list and map views render from.

pub mod contact;
pub mod contacted;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod industry;
pub mod map;
pub mod projection;
pub mod selection;
pub mod store;

pub use contact::{CallIntent, ClipboardError, ClipboardSink, MailIntent, UriLauncher};
pub use contacted::ContactedSet;
pub use dataset::{ChoiceOption, Dataset, ALL_INDUSTRIES, ALL_REGIONS};
pub use error::DatasetError;
pub use filter::{apply_filter, FilterSelection};
pub use industry::{IndustryKind, IndustryStyle, Rgb};
pub use map::{CameraTransition, MapCamera, MapCommand, MapProjection, MapReconciler, MapViewState};
pub use projection::{CardEmphasis, ListCard, MapMarker, MarkerGlyph, PopupContent, StatusDot};
pub use selection::Selection;
pub use store::{BoardAction, BoardObserver, BoardStore};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
