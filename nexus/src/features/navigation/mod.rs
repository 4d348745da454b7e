mod event;
mod feature;
mod model;

pub(crate) use event::NavigationEvent;
pub(crate) use feature::NavigationFeature;
pub(crate) use model::ContentPage;
