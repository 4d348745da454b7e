use nexus_ui_sidebar::ViewId;

/// Events that change which view the host displays.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavigationEvent {
    ChangeView(ViewId),
}
