use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BlockError;

/// Closed set of block kinds an invitation page is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockVariant {
    Header,
    Content,
    Image,
    Contact,
    Location,
    Rsvp,
}

impl BlockVariant {
    /// Every catalog variant, in palette display order.
    pub const ALL: [BlockVariant; 6] = [
        BlockVariant::Header,
        BlockVariant::Content,
        BlockVariant::Image,
        BlockVariant::Contact,
        BlockVariant::Location,
        BlockVariant::Rsvp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockVariant::Header => "header",
            BlockVariant::Content => "content",
            BlockVariant::Image => "image",
            BlockVariant::Contact => "contact",
            BlockVariant::Location => "location",
            BlockVariant::Rsvp => "rsvp",
        }
    }
}

impl fmt::Display for BlockVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockVariant {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(BlockVariant::Header),
            "content" => Ok(BlockVariant::Content),
            "image" => Ok(BlockVariant::Image),
            "contact" => Ok(BlockVariant::Contact),
            "location" => Ok(BlockVariant::Location),
            "rsvp" => Ok(BlockVariant::Rsvp),
            other => Err(BlockError::UnknownVariant(other.to_string())),
        }
    }
}

/// One typed, ordered unit of invitation content.
///
/// `id` and the payload variant are fixed at creation; everything else is
/// mutated only through reducer actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    /// Zero-based position among siblings. After normalization the orders of
    /// an N-block collection are exactly `0..N`.
    pub order: usize,
    pub visible: bool,
    pub editing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
    #[serde(flatten)]
    pub payload: BlockPayload,
}

impl Block {
    pub fn variant(&self) -> BlockVariant {
        self.payload.variant()
    }
}

/// Variant-specific structured data, tagged by the variant name on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum BlockPayload {
    Header(HeaderPayload),
    Content(ContentPayload),
    Image(ImagePayload),
    Contact(ContactPayload),
    Location(LocationPayload),
    Rsvp(RsvpPayload),
}

impl BlockPayload {
    pub fn variant(&self) -> BlockVariant {
        match self {
            BlockPayload::Header(_) => BlockVariant::Header,
            BlockPayload::Content(_) => BlockVariant::Content,
            BlockPayload::Image(_) => BlockVariant::Image,
            BlockPayload::Contact(_) => BlockVariant::Contact,
            BlockPayload::Location(_) => BlockVariant::Location,
            BlockPayload::Rsvp(_) => BlockVariant::Rsvp,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPayload {
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: String,
    pub wedding_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: String,
    #[serde(default)]
    pub rich_text: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub ratio: AspectRatio,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub contacts: Vec<ContactEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEntry {
    pub name: String,
    pub relation: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    pub venue_name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "square",
            AspectRatio::Portrait => "portrait",
            AspectRatio::Landscape => "landscape",
        }
    }

    /// Parse a legacy ratio hint; unknown strings map to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "square" => Some(AspectRatio::Square),
            "portrait" => Some(AspectRatio::Portrait),
            "landscape" => Some(AspectRatio::Landscape),
            _ => None,
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

/// Variant-independent presentation attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SizeClass>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" => Some(TextAlign::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(SizeClass::Small),
            "medium" => Some(SizeClass::Medium),
            "large" => Some(SizeClass::Large),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Regular => "regular",
            FontWeight::Bold => "bold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "regular" => Some(FontWeight::Regular),
            "bold" => Some(FontWeight::Bold),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parse_round_trip() {
        for variant in BlockVariant::ALL {
            assert_eq!(variant.as_str().parse::<BlockVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let err = "video".parse::<BlockVariant>().unwrap_err();
        assert_eq!(err, BlockError::UnknownVariant("video".to_string()));
    }

    #[test]
    fn block_serializes_with_variant_tag() {
        let block = Block {
            id: "b1".to_string(),
            order: 0,
            visible: true,
            editing: false,
            style: None,
            payload: BlockPayload::Content(ContentPayload {
                title: None,
                body: "소중한 분들을 초대합니다.".to_string(),
                rich_text: false,
            }),
        };

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["variant"], "content");
        assert_eq!(json["body"], "소중한 분들을 초대합니다.");

        let back: Block = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn payload_variant_matches_catalog() {
        let payload = BlockPayload::Rsvp(RsvpPayload::default());
        assert_eq!(payload.variant(), BlockVariant::Rsvp);
    }
}
