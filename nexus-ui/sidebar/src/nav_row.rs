use iced::font::Weight;
use iced::widget::{button, row, svg, text};
use iced::{Alignment, Element, Font, Length};

use crate::model::{NavIcon, NavRow};
use crate::theme::{SidebarPalette, row_button_style, row_icon_style};

const ROW_ICON_SIZE: f32 = 18.0;
const ROW_FONT_SIZE: f32 = 14.0;
const ROW_VERTICAL_PADDING: f32 = 10.0;
const ROW_HORIZONTAL_PADDING: f32 = 12.0;
const ROW_CONTENT_SPACING: f32 = 12.0;

/// Props for rendering a single navigation row.
#[derive(Debug, Clone)]
pub struct NavRowProps<'a, Message> {
    pub icon: NavIcon,
    pub label: &'a str,
    pub is_active: bool,
    /// Message emitted on press. `None` renders an inert row.
    pub on_press: Option<Message>,
    pub palette: SidebarPalette,
}

impl<Message> NavRowProps<'_, Message> {
    /// Build props from a projected row.
    pub fn from_row(row: NavRow<Message>, palette: SidebarPalette) -> Self {
        Self {
            icon: row.icon,
            label: row.label,
            is_active: row.is_active,
            on_press: row.on_press,
            palette,
        }
    }
}

/// Render a clickable icon + label row.
pub fn view<'a, Message: Clone + 'a>(
    props: NavRowProps<'a, Message>,
) -> Element<'a, Message> {
    let NavRowProps {
        icon,
        label,
        is_active,
        on_press,
        palette,
    } = props;

    let glyph = svg::Svg::new(svg::Handle::from_memory(icon.svg_bytes()))
        .width(Length::Fixed(ROW_ICON_SIZE))
        .height(Length::Fixed(ROW_ICON_SIZE))
        .style(move |_, _| row_icon_style(&palette, is_active));

    let label = text(label).size(ROW_FONT_SIZE).font(Font {
        weight: Weight::Medium,
        ..Font::DEFAULT
    });

    let content = row![glyph, label]
        .spacing(ROW_CONTENT_SPACING)
        .align_y(Alignment::Center)
        .width(Length::Fill);

    button(content)
        .on_press_maybe(on_press)
        .padding([ROW_VERTICAL_PADDING, ROW_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .style(move |_, status| row_button_style(&palette, is_active, status))
        .into()
}

#[cfg(test)]
mod tests {
    use super::NavRowProps;
    use crate::model::{NavIcon, NavRow};
    use crate::theme::SidebarPalette;

    #[test]
    fn given_projected_row_when_building_props_then_fields_carry_over() {
        let row = NavRow {
            label: "Active Tenders",
            icon: NavIcon::Tenders,
            is_active: true,
            on_press: Some(7_u8),
        };

        let props = NavRowProps::from_row(row, SidebarPalette::light());

        assert_eq!(props.label, "Active Tenders");
        assert_eq!(props.icon, NavIcon::Tenders);
        assert!(props.is_active);
        assert_eq!(props.on_press, Some(7));
    }

    #[test]
    fn given_placeholder_row_when_building_props_then_press_stays_empty() {
        let row: NavRow<u8> = NavRow {
            label: "Vendors",
            icon: NavIcon::Vendors,
            is_active: false,
            on_press: None,
        };

        let props = NavRowProps::from_row(row, SidebarPalette::light());

        assert!(props.on_press.is_none());
        assert!(!props.is_active);
    }
}
