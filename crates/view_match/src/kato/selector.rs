//! UI-automation selector record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query describing a view on screen
///
/// Every field is optional; absent fields are left out of the serialized
/// form. `Display` prints the compact JSON of the present fields in
/// declaration order, which is what Kato measures distances over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// View class, e.g. `android.widget.Button`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clazz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Content description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focusable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_clickable: Option<bool>,
    /// Package name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkg: Option<String>,
    /// Resource id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Selector {
    /// Create an empty selector
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the view text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the content description
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Set the resource id
    pub fn with_res(mut self, res: impl Into<String>) -> Self {
        self.res = Some(res.into());
        self
    }

    /// Set the view class
    pub fn with_clazz(mut self, clazz: impl Into<String>) -> Self {
        self.clazz = Some(clazz.into());
        self
    }

    /// Set the package name
    pub fn with_pkg(mut self, pkg: impl Into<String>) -> Self {
        self.pkg = Some(pkg.into());
        self
    }

    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.clickable = Some(clickable);
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_absent_fields() {
        assert_eq!(Selector::new().to_string(), "{}");
        let selector = Selector::new()
            .with_res("com.android.settings:id/title")
            .with_text("Sound")
            .with_clickable(true);
        assert_eq!(
            selector.to_string(),
            r#"{"clickable":true,"res":"com.android.settings:id/title","text":"Sound"}"#
        );
    }

    #[test]
    fn deserializes_partial_json() {
        let selector: Selector =
            serde_json::from_str(r#"{"text":"OK","clazz":"android.widget.Button"}"#).unwrap();
        assert_eq!(
            selector,
            Selector::new().with_text("OK").with_clazz("android.widget.Button")
        );
    }
}
