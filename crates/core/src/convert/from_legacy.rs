//! Legacy document → block list reconstruction.
//!
//! Structural blocks are synthesized in the fixed order header, location,
//! contact, rsvp, each only when its legacy fields carry data, and each with
//! a stable synthetic id so repeated load→convert cycles never spawn
//! duplicates. Freeform elements follow in their original array order.

use invitation_legacy::{ElementKind, LegacyDocument, LegacyElement, LegacyElementStyle, WeddingInfo};

use crate::block::factory::reorder_blocks;
use crate::block::types::{
    AspectRatio, Block, BlockPayload, BlockStyle, ContactEntry, ContactPayload, ContentPayload,
    FontWeight, GeoPoint, HeaderPayload, ImagePayload, LocationPayload, RsvpPayload, SizeClass,
    TextAlign,
};

/// Stable ids for blocks implied by `weddingInfo` structure rather than
/// stored as elements.
pub const HEADER_BLOCK_ID: &str = "block-header";
pub const LOCATION_BLOCK_ID: &str = "block-location";
pub const CONTACT_BLOCK_ID: &str = "block-contact";
pub const RSVP_BLOCK_ID: &str = "block-rsvp";

/// Rebuild a block list from the legacy persistence shape.
pub fn from_legacy(doc: &LegacyDocument) -> Vec<Block> {
    let info = &doc.wedding_info;
    let mut blocks = Vec::new();

    if has_header(info) {
        blocks.push(structural(
            HEADER_BLOCK_ID,
            blocks.len(),
            BlockPayload::Header(HeaderPayload {
                groom_name: info.groom_name.clone().unwrap_or_default(),
                bride_name: info.bride_name.clone().unwrap_or_default(),
                wedding_date: info.wedding_date.clone().unwrap_or_default(),
                wedding_time: info.wedding_time.clone().unwrap_or_default(),
                subtitle: info.subtitle.clone(),
            }),
        ));
    }

    if has_location(info) {
        let coords = match (info.venue_lat, info.venue_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        };
        blocks.push(structural(
            LOCATION_BLOCK_ID,
            blocks.len(),
            BlockPayload::Location(LocationPayload {
                venue_name: info.venue_name.clone().unwrap_or_default(),
                address: info.venue_address.clone().unwrap_or_default(),
                detail_address: info.venue_detail.clone(),
                coords,
                parking_info: info.parking_info.clone(),
                transport_info: info.transport_info.clone(),
            }),
        ));
    }

    if !info.contacts.is_empty() {
        blocks.push(structural(
            CONTACT_BLOCK_ID,
            blocks.len(),
            BlockPayload::Contact(ContactPayload {
                title: info.contact_title.clone(),
                contacts: info
                    .contacts
                    .iter()
                    .map(|c| ContactEntry {
                        name: c.name.clone(),
                        relation: c.relation.clone(),
                        phone: c.phone.clone(),
                    })
                    .collect(),
            }),
        ));
    }

    if has_rsvp(info) {
        blocks.push(structural(
            RSVP_BLOCK_ID,
            blocks.len(),
            BlockPayload::Rsvp(RsvpPayload {
                title: info.rsvp_title.clone(),
                description: info.rsvp_description.clone(),
                due_date: info.rsvp_due_date.clone(),
                enabled: info.rsvp_enabled,
            }),
        ));
    }

    for (index, element) in doc.elements.iter().enumerate() {
        let order = blocks.len();
        blocks.push(element_to_block(element, index, order));
    }

    reorder_blocks(blocks)
}

fn has_header(info: &WeddingInfo) -> bool {
    any_set(&[
        &info.groom_name,
        &info.bride_name,
        &info.wedding_date,
        &info.wedding_time,
        &info.subtitle,
    ])
}

fn has_location(info: &WeddingInfo) -> bool {
    any_set(&[&info.venue_name, &info.venue_address])
}

fn has_rsvp(info: &WeddingInfo) -> bool {
    info.rsvp_enabled
        || any_set(&[&info.rsvp_title, &info.rsvp_description, &info.rsvp_due_date])
}

fn any_set(fields: &[&Option<String>]) -> bool {
    fields
        .iter()
        .any(|f| f.as_deref().is_some_and(|s| !s.trim().is_empty()))
}

fn structural(id: &str, order: usize, payload: BlockPayload) -> Block {
    Block {
        id: id.to_string(),
        order,
        visible: true,
        editing: false,
        style: None,
        payload,
    }
}

fn element_to_block(element: &LegacyElement, index: usize, order: usize) -> Block {
    let payload = match element.kind {
        ElementKind::Text => BlockPayload::Content(ContentPayload {
            title: element.title.clone(),
            body: element.text.clone().unwrap_or_default(),
            rich_text: element.rich_text,
        }),
        ElementKind::Image => BlockPayload::Image(ImagePayload {
            url: element.url.clone().unwrap_or_default(),
            alt: element.alt.clone(),
            caption: element.caption.clone(),
            ratio: element
                .aspect_ratio
                .as_deref()
                .and_then(AspectRatio::parse)
                .unwrap_or_else(|| infer_ratio(element.width, element.height)),
        }),
    };

    Block {
        id: element
            .id
            .clone()
            .unwrap_or_else(|| format!("element-{index}")),
        order,
        visible: true,
        editing: false,
        style: element.style.as_ref().and_then(style_from_legacy),
        payload,
    }
}

/// Fall back to the pixel box when the legacy element has no ratio hint.
fn infer_ratio(width: f64, height: f64) -> AspectRatio {
    if (width - height).abs() < f64::EPSILON {
        AspectRatio::Square
    } else if width < height {
        AspectRatio::Portrait
    } else {
        AspectRatio::Landscape
    }
}

fn style_from_legacy(style: &LegacyElementStyle) -> Option<BlockStyle> {
    let parsed = BlockStyle {
        align: style.align.as_deref().and_then(TextAlign::parse),
        size: style.size.as_deref().and_then(SizeClass::parse),
        weight: style.weight.as_deref().and_then(FontWeight::parse),
        color: style.color.clone(),
        spacing: style.spacing.as_deref().and_then(SizeClass::parse),
    };
    (parsed != BlockStyle::default()).then_some(parsed)
}
