use std::path::PathBuf;

use iced::font::Weight;
use iced::widget::{
    Column, Space, column, container, hover, image, mouse_area, row, text,
};
use iced::{Alignment, Color, Element, Font, Length, alignment, mouse};

use crate::model::{BRAND, NavRow, PROFILE, Profile, ViewId, nav_rows};
use crate::nav_row::{self, NavRowProps};
use crate::theme::{
    SidebarPalette, avatar_style, profile_card_style, separator_style,
    surface_style,
};

/// Default width of the sidebar, border included.
pub const SIDEBAR_WIDTH: f32 = 256.0;

const BORDER_WIDTH: f32 = 1.0;

const HEADER_HEIGHT: f32 = 64.0;
const HEADER_HORIZONTAL_PADDING: f32 = 24.0;
const HEADER_SPACING: f32 = 12.0;
const LOGO_BOX_SIZE: f32 = 40.0;
const PRODUCT_NAME_SIZE: f32 = 20.0;

const NAV_PADDING: f32 = 16.0;
const NAV_SPACING: f32 = 4.0;

const FOOTER_PADDING: f32 = 16.0;
const PROFILE_PADDING: f32 = 8.0;
const PROFILE_SPACING: f32 = 12.0;
const AVATAR_SIZE: f32 = 32.0;
const AVATAR_FONT_SIZE: f32 = 12.0;
const NAME_FONT_SIZE: f32 = 14.0;
const ROLE_FONT_SIZE: f32 = 12.0;

type ChangeView<'a, Message> = dyn Fn(ViewId) -> Message + 'a;

/// Navigation sidebar bound to a host-owned current view.
///
/// The sidebar never stores the current view. It reads the value passed to
/// [`SidebarView::new`] and reports presses through `on_change`. The host
/// applies the change and passes the new value on the next render.
pub struct SidebarView<'a, Message> {
    current: &'a str,
    on_change: Box<ChangeView<'a, Message>>,
    logo_path: PathBuf,
    profile: Profile,
    palette: SidebarPalette,
    width: f32,
}

impl<'a, Message> SidebarView<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a sidebar for `current` that maps presses through `on_change`.
    pub fn new(
        current: &'a str,
        on_change: impl Fn(ViewId) -> Message + 'a,
    ) -> Self {
        Self {
            current,
            on_change: Box::new(on_change),
            logo_path: PathBuf::from(BRAND.logo_path),
            profile: PROFILE,
            palette: SidebarPalette::default(),
            width: SIDEBAR_WIDTH,
        }
    }

    /// Load the header logo from `path` instead of the bundled default.
    pub fn logo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_path = path.into();
        self
    }

    /// Override the colour palette.
    pub fn palette(mut self, palette: SidebarPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Override the total sidebar width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Rows as they will be rendered for the current view.
    pub fn rows(&self) -> Vec<NavRow<Message>> {
        nav_rows(self.current, &self.on_change)
    }

    /// Profile shown in the footer. Independent of the current view.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Build the sidebar element.
    pub fn view(self) -> Element<'a, Message> {
        let palette = self.palette;

        let nav = Column::with_children(self.rows().into_iter().map(|row| {
            nav_row::view(NavRowProps::from_row(row, palette))
        }))
        .spacing(NAV_SPACING)
        .padding(NAV_PADDING)
        .width(Length::Fill)
        .height(Length::Fill);

        let body = column![
            header(self.logo_path, palette),
            horizontal_rule(palette.divider),
            nav,
            horizontal_rule(palette.divider),
            footer(self.profile, palette),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        let panel = container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| surface_style(&palette));

        row![panel, vertical_rule(palette.border)]
            .width(Length::Fixed(self.width))
            .height(Length::Fill)
            .into()
    }
}

fn header<'a, Message: 'a>(
    logo_path: PathBuf,
    palette: SidebarPalette,
) -> Element<'a, Message> {
    let logo = container(
        image(image::Handle::from_path(logo_path))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(LOGO_BOX_SIZE))
    .height(Length::Fixed(LOGO_BOX_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let product_name = text(BRAND.product_name)
        .size(PRODUCT_NAME_SIZE)
        .color(palette.title)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    container(
        row![logo, product_name]
            .spacing(HEADER_SPACING)
            .align_y(Alignment::Center),
    )
    .padding([0.0, HEADER_HORIZONTAL_PADDING])
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .into()
}

fn footer<'a, Message: Clone + 'a>(
    profile: Profile,
    palette: SidebarPalette,
) -> Element<'a, Message> {
    let card = hover(
        profile_card(profile, palette, false),
        profile_card(profile, palette, true),
    );

    container(mouse_area(card).interaction(mouse::Interaction::Pointer))
        .padding(FOOTER_PADDING)
        .width(Length::Fill)
        .into()
}

fn profile_card<'a, Message: 'a>(
    profile: Profile,
    palette: SidebarPalette,
    is_hovered: bool,
) -> Element<'a, Message> {
    let avatar = container(text(profile.initials).size(AVATAR_FONT_SIZE).font(
        Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        },
    ))
    .width(Length::Fixed(AVATAR_SIZE))
    .height(Length::Fixed(AVATAR_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| avatar_style(&palette));

    let name = text(profile.name)
        .size(NAME_FONT_SIZE)
        .color(palette.name)
        .font(Font {
            weight: Weight::Semibold,
            ..Font::DEFAULT
        });
    let role = text(profile.role).size(ROLE_FONT_SIZE).color(palette.muted);

    container(
        row![avatar, column![name, role]]
            .spacing(PROFILE_SPACING)
            .align_y(Alignment::Center),
    )
    .padding(PROFILE_PADDING)
    .width(Length::Fill)
    .style(move |_| profile_card_style(&palette, is_hovered))
    .into()
}

fn horizontal_rule<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(BORDER_WIDTH))
        .style(move |_| separator_style(color))
        .into()
}

fn vertical_rule<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| separator_style(color))
        .into()
}

#[cfg(test)]
mod tests {
    use super::{SIDEBAR_WIDTH, SidebarView};
    use crate::model::{PROFILE, ViewId};

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        SetView(ViewId),
    }

    #[test]
    fn given_current_view_when_listing_rows_then_active_flag_follows_input() {
        let dashboard = SidebarView::new("dashboard", Message::SetView);
        let tender = SidebarView::new("tender", Message::SetView);

        let dashboard_rows = dashboard.rows();
        let tender_rows = tender.rows();

        assert!(dashboard_rows[0].is_active);
        assert!(!dashboard_rows[1].is_active);
        assert!(!tender_rows[0].is_active);
        assert!(tender_rows[1].is_active);
    }

    #[test]
    fn given_vendors_row_when_pressed_then_no_message_is_emitted() {
        let sidebar = SidebarView::new("dashboard", Message::SetView);

        let vendors = sidebar
            .rows()
            .into_iter()
            .find(|row| row.label == "Vendors")
            .expect("vendors row should be present");

        assert_eq!(vendors.on_press, None);
        assert!(!vendors.is_active);
    }

    #[test]
    fn given_any_current_view_when_rendering_then_footer_profile_is_unchanged()
    {
        assert_eq!(PROFILE.initials, "JD");
        assert_eq!(PROFILE.name, "Harsh Chaudhari");
        assert_eq!(PROFILE.role, "Head of Estimation");

        for current in ["dashboard", "tender", "settings", ""] {
            let sidebar = SidebarView::new(current, Message::SetView);

            assert_eq!(
                sidebar.profile(),
                PROFILE,
                "footer changed for {current:?}"
            );
            let _element = sidebar.view();
        }
    }

    #[test]
    fn given_builder_overrides_when_viewing_then_element_is_built() {
        let sidebar = SidebarView::new("settings", Message::SetView)
            .logo_path("/nonexistent/logo.png")
            .width(SIDEBAR_WIDTH * 1.5);

        assert!(sidebar.rows().iter().all(|row| !row.is_active));
        let _element = sidebar.view();
    }
}
