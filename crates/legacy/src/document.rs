use serde::{Deserialize, Serialize};

use crate::element::LegacyElement;

/// Top-level legacy invitation document as stored by the persistence service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDocument {
    #[serde(default)]
    pub wedding_info: WeddingInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<LegacyElement>,
}

impl LegacyDocument {
    /// True when the document carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.wedding_info == WeddingInfo::default() && self.elements.is_empty()
    }
}

/// Scalar wedding facts. Every field is optional on the wire; older
/// documents routinely omit most of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bride_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wedding_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wedding_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_info: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<LegacyContact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_due_date: Option<String>,
    #[serde(default)]
    pub rsvp_enabled: bool,
}

/// One row of the wedding-party contact list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relation: String,
    #[serde(default)]
    pub phone: String,
}
