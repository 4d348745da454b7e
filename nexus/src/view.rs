use iced::widget::{column, container, row, text};
use iced::{Color, Element, Font, Length, Theme, font};
use nexus_ui_sidebar::{SidebarView, ViewId};

use super::{App, AppEvent};
use crate::features::navigation::{ContentPage, NavigationEvent};

const CONTENT_PADDING: f32 = 32.0;
const CONTENT_SPACING: f32 = 8.0;
const TITLE_FONT_SIZE: f32 = 24.0;
const SUBTITLE_FONT_SIZE: f32 = 14.0;
const CONTENT_BACKGROUND: Color = Color::from_rgb8(0xF9, 0xFA, 0xFB);
const SUBTITLE_COLOR: Color = Color::from_rgb8(0x6B, 0x72, 0x80);

/// Map a sidebar change request onto the root event loop.
pub(super) fn sidebar_message(view: ViewId) -> AppEvent {
    AppEvent::Navigation(NavigationEvent::ChangeView(view))
}

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let navigation = app.features.navigation();

    let sidebar =
        SidebarView::new(navigation.current().as_str(), sidebar_message)
            .logo_path(app.settings.logo_path())
            .view();

    row![sidebar, content(navigation.page())]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn content<'a>(page: ContentPage) -> Element<'a, AppEvent> {
    let title = text(page.title().to_string())
        .size(TITLE_FONT_SIZE)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });
    let subtitle = text(page.subtitle())
        .size(SUBTITLE_FONT_SIZE)
        .color(SUBTITLE_COLOR);

    container(column![title, subtitle].spacing(CONTENT_SPACING))
        .padding(CONTENT_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| container::Style {
            background: Some(CONTENT_BACKGROUND.into()),
            ..Default::default()
        })
        .into()
}
