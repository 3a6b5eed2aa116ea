//! Block list → legacy document projection.
//!
//! Structural blocks (header, location, contact, rsvp) collapse into the
//! `weddingInfo` scalars; when duplicates of one variant exist, the highest
//! order wins (last write by ascending order). Content and image blocks
//! become absolutely-positioned elements: the legacy canvas has no ordering
//! concept, so each gets a deterministic slot in a vertical stack derived
//! from its block order.

use invitation_legacy::{
    ElementKind, LegacyContact, LegacyDocument, LegacyElement, LegacyElementStyle, WeddingInfo,
};

use crate::block::factory::reorder_blocks;
use crate::block::types::{AspectRatio, Block, BlockPayload, BlockStyle};

pub(crate) const CANVAS_MARGIN_X: f64 = 40.0;
pub(crate) const STACK_TOP_Y: f64 = 160.0;
pub(crate) const STACK_ROW_HEIGHT: f64 = 240.0;

const TEXT_WIDTH: f64 = 320.0;
const TEXT_HEIGHT: f64 = 180.0;

/// Project a block list into the legacy persistence shape.
pub fn to_legacy(blocks: &[Block]) -> LegacyDocument {
    let ordered = reorder_blocks(blocks.to_vec());

    let mut info = WeddingInfo::default();
    let mut elements = Vec::new();

    for block in &ordered {
        match &block.payload {
            BlockPayload::Header(p) => {
                info.groom_name = non_empty(&p.groom_name);
                info.bride_name = non_empty(&p.bride_name);
                info.wedding_date = non_empty(&p.wedding_date);
                info.wedding_time = non_empty(&p.wedding_time);
                info.subtitle = p.subtitle.as_deref().and_then(|s| non_empty(s));
            }
            BlockPayload::Location(p) => {
                info.venue_name = non_empty(&p.venue_name);
                info.venue_address = non_empty(&p.address);
                info.venue_detail = p.detail_address.as_deref().and_then(|s| non_empty(s));
                info.venue_lat = p.coords.map(|c| c.lat);
                info.venue_lng = p.coords.map(|c| c.lng);
                info.parking_info = p.parking_info.as_deref().and_then(|s| non_empty(s));
                info.transport_info = p.transport_info.as_deref().and_then(|s| non_empty(s));
            }
            BlockPayload::Contact(p) => {
                info.contact_title = p.title.as_deref().and_then(|s| non_empty(s));
                info.contacts = p
                    .contacts
                    .iter()
                    .map(|c| LegacyContact {
                        name: c.name.clone(),
                        relation: c.relation.clone(),
                        phone: c.phone.clone(),
                    })
                    .collect();
            }
            BlockPayload::Rsvp(p) => {
                info.rsvp_title = p.title.as_deref().and_then(|s| non_empty(s));
                info.rsvp_description = p.description.as_deref().and_then(|s| non_empty(s));
                info.rsvp_due_date = p.due_date.as_deref().and_then(|s| non_empty(s));
                info.rsvp_enabled = p.enabled;
            }
            BlockPayload::Content(p) => {
                let (x, y) = stacked_position(block.order);
                elements.push(LegacyElement {
                    id: Some(block.id.clone()),
                    kind: ElementKind::Text,
                    x,
                    y,
                    width: TEXT_WIDTH,
                    height: TEXT_HEIGHT,
                    title: p.title.clone(),
                    text: Some(p.body.clone()),
                    rich_text: p.rich_text,
                    url: None,
                    alt: None,
                    caption: None,
                    aspect_ratio: None,
                    style: block.style.as_ref().map(style_to_legacy),
                });
            }
            BlockPayload::Image(p) => {
                let (x, y) = stacked_position(block.order);
                let (width, height) = image_size(p.ratio);
                elements.push(LegacyElement {
                    id: Some(block.id.clone()),
                    kind: ElementKind::Image,
                    x,
                    y,
                    width,
                    height,
                    title: None,
                    text: None,
                    rich_text: false,
                    url: Some(p.url.clone()),
                    alt: p.alt.clone(),
                    caption: p.caption.clone(),
                    aspect_ratio: Some(p.ratio.as_str().to_string()),
                    style: block.style.as_ref().map(style_to_legacy),
                });
            }
        }
    }

    LegacyDocument {
        wedding_info: info,
        elements,
    }
}

/// Deterministic vertical-stacking slot for a freeform element.
fn stacked_position(order: usize) -> (f64, f64) {
    (CANVAS_MARGIN_X, STACK_TOP_Y + order as f64 * STACK_ROW_HEIGHT)
}

fn image_size(ratio: AspectRatio) -> (f64, f64) {
    match ratio {
        AspectRatio::Square => (280.0, 280.0),
        AspectRatio::Portrait => (240.0, 320.0),
        AspectRatio::Landscape => (320.0, 240.0),
    }
}

fn style_to_legacy(style: &BlockStyle) -> LegacyElementStyle {
    LegacyElementStyle {
        align: style.align.map(|v| v.as_str().to_string()),
        size: style.size.map(|v| v.as_str().to_string()),
        weight: style.weight.map(|v| v.as_str().to_string()),
        color: style.color.clone(),
        spacing: style.spacing.map(|v| v.as_str().to_string()),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| s.to_string())
}
