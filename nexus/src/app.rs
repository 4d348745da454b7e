#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Task, Theme};

use crate::features::Features;
use crate::features::navigation::NavigationEvent;
use crate::features::settings::SettingsData;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    Navigation(NavigationEvent),
}

/// Root application state.
pub(crate) struct App {
    settings: SettingsData,
    features: Features,
}

impl App {
    /// Initialize the application from loaded settings.
    pub(crate) fn new(settings: SettingsData) -> (Self, Task<AppEvent>) {
        let features = Features::new(settings.initial_view().clone());
        log::info!("starting on view {}", settings.initial_view());

        (Self { settings, features }, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("EPC Nexus")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
