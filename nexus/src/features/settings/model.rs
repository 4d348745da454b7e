use nexus_ui_sidebar::{BRAND, ViewId};
use serde::Serialize;

/// Typed settings payload used for persistence and start-up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SettingsData {
    initial_view: ViewId,
    logo_path: String,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            initial_view: ViewId::default(),
            logo_path: String::from(BRAND.logo_path),
        }
    }
}

impl SettingsData {
    /// Return the view shown when the window opens.
    pub(crate) fn initial_view(&self) -> &ViewId {
        &self.initial_view
    }

    /// Return the path of the brand logo image.
    pub(crate) fn logo_path(&self) -> &str {
        &self.logo_path
    }

    /// Build settings from loosely typed JSON, keeping defaults for any
    /// missing, mistyped or blank field.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(view) = read_string_field(value, "initial_view")
            .filter(|value| is_non_empty(value))
        {
            settings.initial_view = ViewId::new(view.trim());
        }

        if let Some(path) = read_string_field(value, "logo_path")
            .filter(|value| is_non_empty(value))
        {
            settings.logo_path = path;
        }

        settings
    }
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use nexus_ui_sidebar::ViewId;
    use serde_json::json;

    use super::SettingsData;

    #[test]
    fn given_complete_json_when_from_json_then_fields_are_loaded() {
        let value = json!({
            "initial_view": "tender",
            "logo_path": "/opt/nexus/logo.png"
        });

        let settings = SettingsData::from_json(&value);

        assert_eq!(settings.initial_view(), &ViewId::tender());
        assert_eq!(settings.logo_path(), "/opt/nexus/logo.png");
    }

    #[test]
    fn given_blank_or_mistyped_fields_when_from_json_then_defaults_are_used() {
        let defaults = SettingsData::default();
        let value = json!({
            "initial_view": "   ",
            "logo_path": 42
        });

        let settings = SettingsData::from_json(&value);

        assert_eq!(settings, defaults);
    }

    #[test]
    fn given_unknown_view_when_from_json_then_value_is_kept_verbatim() {
        let value = json!({ "initial_view": " reports " });

        let settings = SettingsData::from_json(&value);

        assert_eq!(settings.initial_view().as_str(), "reports");
    }

    #[test]
    fn given_settings_when_serialized_then_json_uses_flat_string_fields() {
        let settings = SettingsData::from_json(
            &json!({ "initial_view": "tender", "logo_path": "logo.png" }),
        );

        let value =
            serde_json::to_value(&settings).expect("settings should serialize");

        assert_eq!(
            value,
            json!({ "initial_view": "tender", "logo_path": "logo.png" })
        );
    }
}
