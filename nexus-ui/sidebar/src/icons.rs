use crate::model::NavIcon;

pub(crate) const NAV_DASHBOARD: &[u8] =
    include_bytes!("../assets/svg/layout-dashboard.svg");
pub(crate) const NAV_TENDERS: &[u8] =
    include_bytes!("../assets/svg/file-text.svg");
pub(crate) const NAV_VENDORS: &[u8] = include_bytes!("../assets/svg/users.svg");
pub(crate) const NAV_ANALYTICS: &[u8] =
    include_bytes!("../assets/svg/pie-chart.svg");

impl NavIcon {
    /// Embedded SVG source for this glyph.
    pub fn svg_bytes(self) -> &'static [u8] {
        match self {
            NavIcon::Dashboard => NAV_DASHBOARD,
            NavIcon::Tenders => NAV_TENDERS,
            NavIcon::Vendors => NAV_VENDORS,
            NavIcon::Analytics => NAV_ANALYTICS,
        }
    }
}
