use iced::Task;

use crate::app::AppEvent;

pub(crate) mod navigation;
pub(crate) mod settings;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for host-owned feature state.
pub(crate) struct Features {
    navigation: navigation::NavigationFeature,
}

impl Features {
    /// Create a features container starting on `initial_view`.
    pub(crate) fn new(initial_view: nexus_ui_sidebar::ViewId) -> Self {
        Self {
            navigation: navigation::NavigationFeature::new(initial_view),
        }
    }

    /// Return read-only access to navigation state and queries.
    pub(crate) fn navigation(&self) -> &navigation::NavigationFeature {
        &self.navigation
    }

    /// Return mutable access for routing navigation events.
    pub(crate) fn navigation_mut(
        &mut self,
    ) -> &mut navigation::NavigationFeature {
        &mut self.navigation
    }
}
