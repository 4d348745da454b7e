//! Navigation sidebar for the EPC Nexus dashboard, built on [`iced`].
//!
//! This crate is split into two layers:
//! - model helpers ([`NavItem`], [`nav_rows`], [`ViewId`]) that are UI-agnostic;
//! - view helpers ([`SidebarView`], [`nav_row::view`]) that render in `iced`.
//!
//! The sidebar does not own the current view. The host keeps it in its own
//! state, passes it to [`SidebarView::new`] on every render and applies the
//! [`ViewId`] carried by the message built in `on_change`.
//!
//! Only the Dashboard and Active Tenders entries are wired. Vendors and
//! Analytics are shown but never become active and never emit a message.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::{row, text};
//! use iced::Element;
//! use nexus_ui_sidebar::{SidebarView, ViewId};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     ChangeView(ViewId),
//! }
//!
//! struct State {
//!     current: ViewId,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::ChangeView(view) => state.current = view,
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     row![
//!         SidebarView::new(state.current.as_str(), Message::ChangeView).view(),
//!         text(state.current.to_string()),
//!     ]
//!     .into()
//! }
//! ```

mod icons;
mod model;
pub mod nav_row;
mod theme;
mod view;

pub use model::{
    BRAND, Brand, NAV_ITEMS, NavIcon, NavItem, NavRow, PROFILE, Profile,
    ViewId, nav_rows,
};
pub use theme::{
    SidebarPalette, avatar_style, profile_card_style, row_button_style,
    row_icon_style, separator_style, surface_style,
};
pub use view::{SIDEBAR_WIDTH, SidebarView};
