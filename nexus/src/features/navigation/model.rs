use nexus_ui_sidebar::ViewId;

/// Page rendered in the content area for a view identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentPage {
    Dashboard,
    Tenders,
    Unknown(ViewId),
}

impl ContentPage {
    /// Resolve the page registered for `view`.
    pub(crate) fn for_view(view: &ViewId) -> Self {
        match view.as_str() {
            ViewId::DASHBOARD => ContentPage::Dashboard,
            ViewId::TENDER => ContentPage::Tenders,
            _ => ContentPage::Unknown(view.clone()),
        }
    }

    pub(crate) fn title(&self) -> &str {
        match self {
            ContentPage::Dashboard => "Dashboard",
            ContentPage::Tenders => "Active Tenders",
            ContentPage::Unknown(_) => "Unknown view",
        }
    }

    pub(crate) fn subtitle(&self) -> String {
        match self {
            ContentPage::Dashboard => {
                String::from("Overview of estimation activity")
            },
            ContentPage::Tenders => {
                String::from("Tenders currently open for estimation")
            },
            ContentPage::Unknown(view) => {
                format!("No page is registered for \"{view}\"")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use nexus_ui_sidebar::ViewId;

    use super::ContentPage;

    #[test]
    fn given_wired_views_when_resolving_page_then_matching_page_is_returned() {
        assert_eq!(
            ContentPage::for_view(&ViewId::dashboard()),
            ContentPage::Dashboard
        );
        assert_eq!(
            ContentPage::for_view(&ViewId::tender()),
            ContentPage::Tenders
        );
        assert_eq!(ContentPage::Tenders.title(), "Active Tenders");
    }

    #[test]
    fn given_unknown_view_when_resolving_page_then_fallback_names_the_view() {
        let page = ContentPage::for_view(&ViewId::new("settings"));

        assert_eq!(page, ContentPage::Unknown(ViewId::new("settings")));
        assert_eq!(page.title(), "Unknown view");
        assert!(page.subtitle().contains("\"settings\""));
    }
}
