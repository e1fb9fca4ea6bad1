pub mod action;
pub mod error;
pub mod navigator;
pub mod pagination;
pub mod provider;
pub mod view;

pub use action::{Action, apply_action};
pub use error::OpenError;
pub use navigator::Navigator;
pub use pagination::{page_start, visible_window};
pub use provider::{DirEntryInfo, EntryKind, EntryProvider, FsProvider};
pub use view::{View, ViewKind};
