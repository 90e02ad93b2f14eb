//! Terminal rendering.
//!
//! [`TerminalPresenter`] is the runtime's presentation adapter: it folds the
//! game's calls into a [`ViewState`] and redraws the screen from it.

mod presenter;
pub mod theme;
mod ui;
pub mod view;
pub mod widgets;

pub use presenter::TerminalPresenter;
pub use view::{Dirty, HistoryEntry, ViewState};
