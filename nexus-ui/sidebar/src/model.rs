use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an application view owned by the host.
///
/// Any string is a valid identifier. Only [`ViewId::DASHBOARD`] and
/// [`ViewId::TENDER`] are reachable from the sidebar; other values simply
/// leave every row inactive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub const DASHBOARD: &'static str = "dashboard";
    pub const TENDER: &'static str = "tender";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn dashboard() -> Self {
        Self::new(Self::DASHBOARD)
    }

    pub fn tender() -> Self {
        Self::new(Self::TENDER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ViewId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ViewId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Glyph shown next to a navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Tenders,
    Vendors,
    Analytics,
}

/// Static definition of a sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    /// View requested on press. `None` keeps the entry as a visible
    /// placeholder that never activates and never emits.
    pub target: Option<&'static str>,
}

impl NavItem {
    /// Whether pressing this entry can request a view change.
    pub fn is_wired(&self) -> bool {
        self.target.is_some()
    }

    /// Whether this entry matches the host's current view.
    pub fn is_active(&self, current: &str) -> bool {
        self.target == Some(current)
    }
}

/// Entries rendered by the sidebar, top to bottom.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Dashboard",
        icon: NavIcon::Dashboard,
        target: Some(ViewId::DASHBOARD),
    },
    NavItem {
        label: "Active Tenders",
        icon: NavIcon::Tenders,
        target: Some(ViewId::TENDER),
    },
    NavItem {
        label: "Vendors",
        icon: NavIcon::Vendors,
        target: None,
    },
    NavItem {
        label: "Analytics",
        icon: NavIcon::Analytics,
        target: None,
    },
];

/// Render-time projection of a [`NavItem`] against the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct NavRow<Message> {
    pub label: &'static str,
    pub icon: NavIcon,
    pub is_active: bool,
    pub on_press: Option<Message>,
}

/// Project [`NAV_ITEMS`] into rows for the given current view.
///
/// Always yields one row per entry, in declaration order. Wired rows carry
/// the message built by `on_change` for their target; placeholders carry none.
pub fn nav_rows<Message>(
    current: &str,
    on_change: impl Fn(ViewId) -> Message,
) -> Vec<NavRow<Message>> {
    NAV_ITEMS
        .iter()
        .map(|item| NavRow {
            label: item.label,
            icon: item.icon,
            is_active: item.is_active(current),
            on_press: item.target.map(|target| on_change(ViewId::new(target))),
        })
        .collect()
}

/// Header content shown above the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub product_name: &'static str,
    pub logo_path: &'static str,
}

pub const BRAND: Brand = Brand {
    product_name: "EPC Nexus",
    logo_path: "assets/Sereno_Logo.png",
};

/// Footer content identifying the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub initials: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const PROFILE: Profile = Profile {
    initials: "JD",
    name: "Harsh Chaudhari",
    role: "Head of Estimation",
};
