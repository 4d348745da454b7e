use iced::Task;
use nexus_ui_sidebar::ViewId;

use super::event::NavigationEvent;
use super::model::ContentPage;
use crate::app::AppEvent;
use crate::features::Feature;

/// Navigation feature root that owns the current view identifier.
#[derive(Debug)]
pub(crate) struct NavigationFeature {
    current: ViewId,
}

impl NavigationFeature {
    /// Construct navigation state starting on `initial`.
    pub(crate) fn new(initial: ViewId) -> Self {
        Self { current: initial }
    }

    /// Return the identifier of the displayed view.
    pub(crate) fn current(&self) -> &ViewId {
        &self.current
    }

    /// Return the page registered for the displayed view.
    pub(crate) fn page(&self) -> ContentPage {
        ContentPage::for_view(&self.current)
    }
}

impl Feature for NavigationFeature {
    type Event = NavigationEvent;
    type Ctx<'a> = ();

    fn reduce<'a>(
        &mut self,
        event: NavigationEvent,
        _ctx: &(),
    ) -> Task<AppEvent> {
        match event {
            NavigationEvent::ChangeView(view) => {
                if view == self.current {
                    log::debug!("view {view} already active");
                    return Task::none();
                }

                log::debug!("view changed: {} -> {view}", self.current);
                self.current = view;
                Task::none()
            },
        }
    }
}
