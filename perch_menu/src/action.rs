// Copyright 2026 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu actions: the externally supplied tree the menu renders.
//!
//! The state machine only cares about an action's identifier and whether it is
//! disabled. Everything else is carried through to the renderer untouched.

use alloc::string::String;
use alloc::vec::Vec;

bitflags::bitflags! {
    /// Per-action attributes. Empty by default: enabled, visible, not destructive.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(from = "AttributeRecord", into = "AttributeRecord")
    )]
    pub struct ActionAttributes: u8 {
        /// Rendered muted; activation is swallowed.
        const DISABLED    = 0b0000_0001;
        /// Omitted from rendering and activation, along with its subactions.
        const HIDDEN      = 0b0000_0010;
        /// Rendered with the destructive color unless an explicit color is set.
        const DESTRUCTIVE = 0b0000_0100;
    }
}

// Configuration data spells attributes as `{ "disabled": true, ... }`.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct AttributeRecord {
    #[serde(skip_serializing_if = "core::ops::Not::not")]
    disabled: bool,
    #[serde(skip_serializing_if = "core::ops::Not::not")]
    hidden: bool,
    #[serde(skip_serializing_if = "core::ops::Not::not")]
    destructive: bool,
}

#[cfg(feature = "serde")]
impl From<AttributeRecord> for ActionAttributes {
    fn from(r: AttributeRecord) -> Self {
        let mut a = Self::empty();
        a.set(Self::DISABLED, r.disabled);
        a.set(Self::HIDDEN, r.hidden);
        a.set(Self::DESTRUCTIVE, r.destructive);
        a
    }
}

#[cfg(feature = "serde")]
impl From<ActionAttributes> for AttributeRecord {
    fn from(a: ActionAttributes) -> Self {
        Self {
            disabled: a.contains(ActionAttributes::DISABLED),
            hidden: a.contains(ActionAttributes::HIDDEN),
            destructive: a.contains(ActionAttributes::DESTRUCTIVE),
        }
    }
}

/// Check mark state shown next to an action.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ActionState {
    /// No mark.
    #[default]
    Off,
    /// Checked.
    On,
    /// Partially checked.
    Mixed,
}

/// One entry of the action tree.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Action {
    /// Identifier reported to the action-selection callback.
    pub id: String,
    /// Label text.
    pub title: String,
    /// Explicit label color; wins over every semantic color.
    pub title_color: Option<String>,
    /// Secondary line under the label.
    pub subtitle: Option<String>,
    /// Icon reference, resolved by the renderer's icon font.
    pub image: Option<String>,
    /// Icon color.
    pub image_color: Option<String>,
    /// Check mark state.
    pub state: ActionState,
    /// Disabled/hidden/destructive flags.
    pub attributes: ActionAttributes,
    /// Nested actions, rendered as additional rows after this one.
    pub subactions: Vec<Action>,
}

impl Action {
    /// Create an action with an identifier and label.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set an explicit label color.
    pub fn title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = Some(color.into());
        self
    }

    /// Set the secondary line.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the icon reference.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the icon color.
    pub fn image_color(mut self, color: impl Into<String>) -> Self {
        self.image_color = Some(color.into());
        self
    }

    /// Set the check mark state.
    pub fn state(mut self, state: ActionState) -> Self {
        self.state = state;
        self
    }

    /// Replace the attribute set.
    pub fn attributes(mut self, attributes: ActionAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Mark as disabled.
    pub fn disabled(mut self) -> Self {
        self.attributes |= ActionAttributes::DISABLED;
        self
    }

    /// Mark as hidden.
    pub fn hidden(mut self) -> Self {
        self.attributes |= ActionAttributes::HIDDEN;
        self
    }

    /// Mark as destructive.
    pub fn destructive(mut self) -> Self {
        self.attributes |= ActionAttributes::DESTRUCTIVE;
        self
    }

    /// Append one nested action.
    pub fn subaction(mut self, action: Self) -> Self {
        self.subactions.push(action);
        self
    }

    /// True if activation must be swallowed.
    pub fn is_disabled(&self) -> bool {
        self.attributes.contains(ActionAttributes::DISABLED)
    }

    /// True if the action is not rendered.
    pub fn is_hidden(&self) -> bool {
        self.attributes.contains(ActionAttributes::HIDDEN)
    }

    /// True if the action uses the destructive color.
    pub fn is_destructive(&self) -> bool {
        self.attributes.contains(ActionAttributes::DESTRUCTIVE)
    }
}

/// Anything the visibility controller can activate.
///
/// Implemented by [`Action`] and by rendered [`Row`](crate::render::Row)s.
pub trait Activatable {
    /// Identifier reported on activation.
    fn action_id(&self) -> &str;
    /// True if activation must be swallowed.
    fn is_disabled(&self) -> bool;
}

impl Activatable for Action {
    fn action_id(&self) -> &str {
        &self.id
    }

    fn is_disabled(&self) -> bool {
        self.attributes.contains(ActionAttributes::DISABLED)
    }
}

/// Payload handed to the action-selection callback.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ActionEvent {
    /// Identifier of the activated action.
    pub id: String,
    /// Event name; menus report the action identifier here as well.
    pub event: String,
}

impl ActionEvent {
    /// Build the event for an activated action.
    pub fn for_action(action: &(impl Activatable + ?Sized)) -> Self {
        let id = String::from(action.action_id());
        Self {
            event: id.clone(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_enabled_visible_off() {
        let a = Action::new("share", "Share");
        assert!(!a.is_disabled());
        assert!(!a.is_hidden());
        assert!(!a.is_destructive());
        assert_eq!(a.state, ActionState::Off);
        assert!(a.subactions.is_empty());
    }

    #[test]
    fn builder_sets_flags_and_children() {
        let a = Action::new("add", "Add to List")
            .title_color("#2367A2")
            .subaction(Action::new("nested", "Nested").state(ActionState::Mixed))
            .subaction(Action::new("delete", "Delete").destructive())
            .disabled();
        assert!(a.is_disabled());
        assert_eq!(a.title_color.as_deref(), Some("#2367A2"));
        assert_eq!(a.subactions.len(), 2);
        assert!(a.subactions[1].is_destructive());
        assert_eq!(a.subactions[0].state, ActionState::Mixed);
    }

    #[test]
    fn event_reports_id_as_name() {
        let ev = ActionEvent::for_action(&Action::new("share", "Share"));
        assert_eq!(ev.id, "share");
        assert_eq!(ev.event, "share");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_menu_definition_fields() {
        let json = r##"{
            "id": "add",
            "title": "Add to List",
            "titleColor": "#2367A2",
            "imageColor": "#2367A2",
            "attributes": { "disabled": true },
            "subactions": [
                { "id": "nested", "title": "Nested", "state": "mixed" },
                { "id": "gone", "title": "Gone", "attributes": { "hidden": true } },
                { "id": "delete", "title": "Delete", "attributes": { "destructive": true } }
            ]
        }"##;
        let a: Action = serde_json::from_str(json).unwrap();
        assert_eq!(a.attributes, ActionAttributes::DISABLED);
        assert_eq!(a.title_color.as_deref(), Some("#2367A2"));
        assert_eq!(a.image_color.as_deref(), Some("#2367A2"));
        assert_eq!(a.subtitle, None);
        assert_eq!(a.state, ActionState::Off);

        let ids: Vec<&str> = a.subactions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["nested", "gone", "delete"]);
        assert_eq!(a.subactions[0].state, ActionState::Mixed);
        assert!(a.subactions[0].attributes.is_empty());
        assert_eq!(a.subactions[1].attributes, ActionAttributes::HIDDEN);
        assert_eq!(a.subactions[2].attributes, ActionAttributes::DESTRUCTIVE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn writes_only_set_attributes() {
        let plain = serde_json::to_value(Action::new("share", "Share")).unwrap();
        assert_eq!(plain["attributes"], serde_json::json!({}));
        assert_eq!(plain["state"], "off");

        let off = Action::new("off", "Off").disabled();
        let v = serde_json::to_value(&off).unwrap();
        assert_eq!(v["attributes"], serde_json::json!({ "disabled": true }));
        let back: Action = serde_json::from_value(v).unwrap();
        assert_eq!(back, off);
    }
}
