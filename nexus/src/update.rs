use iced::Task;

use super::{App, AppEvent};
use crate::features::Feature;

/// Route each event to its owning feature.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Navigation(event) => {
            app.features.navigation_mut().reduce(event, &())
        },
    }
}
