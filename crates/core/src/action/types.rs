//! Reducer action vocabulary.
//!
//! The legacy editor shipped untyped partial objects for updates; here every
//! partial is an explicit all-optional patch record. `None` means "keep the
//! current value". A patch only applies when its variant matches the target
//! block's payload variant.

use serde::{Deserialize, Serialize};

use crate::block::types::{
    AspectRatio, Block, BlockPayload, BlockStyle, BlockVariant, ContactEntry, FontWeight,
    GeoPoint, SizeClass, TextAlign,
};

/// One dispatched editor action. Applied synchronously and atomically by
/// [`crate::action::reduce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Insert a freshly-created block, after `after_id` when it resolves,
    /// else at the end.
    AddBlock {
        variant: BlockVariant,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after_id: Option<String>,
    },
    RemoveBlock {
        id: String,
    },
    /// Shallow-merge a partial payload/style into the matching block.
    UpdateBlock {
        id: String,
        patch: BlockPatch,
    },
    /// Move a block to a new position; colliding orders are resolved by the
    /// normalization pass.
    ReorderBlocks {
        id: String,
        new_order: usize,
    },
    /// Open the target block for editing and close every other block.
    ToggleEdit {
        id: String,
    },
    DuplicateBlock {
        id: String,
    },
    /// Replace the block list wholesale (document load).
    LoadBlocks {
        blocks: Vec<Block>,
    },
}

/// Partial update for one block. Fields left `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StylePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<PayloadPatch>,
}

impl BlockPatch {
    /// Merge this patch into `block`. Never touches `id`, `order`, or
    /// `editing`; a payload patch for a different variant is skipped.
    pub(crate) fn apply(&self, block: &mut Block) {
        if let Some(visible) = self.visible {
            block.visible = visible;
        }
        if let Some(style) = &self.style {
            style.apply(block.style.get_or_insert_with(BlockStyle::default));
        }
        if let Some(payload) = &self.payload {
            payload.apply(&mut block.payload);
        }
    }
}

/// Partial style update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
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

impl StylePatch {
    fn apply(&self, style: &mut BlockStyle) {
        if let Some(align) = self.align {
            style.align = Some(align);
        }
        if let Some(size) = self.size {
            style.size = Some(size);
        }
        if let Some(weight) = self.weight {
            style.weight = Some(weight);
        }
        if let Some(color) = &self.color {
            style.color = Some(color.clone());
        }
        if let Some(spacing) = self.spacing {
            style.spacing = Some(spacing);
        }
    }
}

/// Variant-specific partial payload, tagged like the payload itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum PayloadPatch {
    Header(HeaderPatch),
    Content(ContentPatch),
    Image(ImagePatch),
    Contact(ContactPatch),
    Location(LocationPatch),
    Rsvp(RsvpPatch),
}

impl PayloadPatch {
    fn apply(&self, payload: &mut BlockPayload) {
        match (self, payload) {
            (PayloadPatch::Header(patch), BlockPayload::Header(p)) => {
                if let Some(v) = &patch.groom_name {
                    p.groom_name = v.clone();
                }
                if let Some(v) = &patch.bride_name {
                    p.bride_name = v.clone();
                }
                if let Some(v) = &patch.wedding_date {
                    p.wedding_date = v.clone();
                }
                if let Some(v) = &patch.wedding_time {
                    p.wedding_time = v.clone();
                }
                if let Some(v) = &patch.subtitle {
                    p.subtitle = Some(v.clone());
                }
            }
            (PayloadPatch::Content(patch), BlockPayload::Content(p)) => {
                if let Some(v) = &patch.title {
                    p.title = Some(v.clone());
                }
                if let Some(v) = &patch.body {
                    p.body = v.clone();
                }
                if let Some(v) = patch.rich_text {
                    p.rich_text = v;
                }
            }
            (PayloadPatch::Image(patch), BlockPayload::Image(p)) => {
                if let Some(v) = &patch.url {
                    p.url = v.clone();
                }
                if let Some(v) = &patch.alt {
                    p.alt = Some(v.clone());
                }
                if let Some(v) = &patch.caption {
                    p.caption = Some(v.clone());
                }
                if let Some(v) = patch.ratio {
                    p.ratio = v;
                }
            }
            (PayloadPatch::Contact(patch), BlockPayload::Contact(p)) => {
                if let Some(v) = &patch.title {
                    p.title = Some(v.clone());
                }
                if let Some(v) = &patch.contacts {
                    p.contacts = v.clone();
                }
            }
            (PayloadPatch::Location(patch), BlockPayload::Location(p)) => {
                if let Some(v) = &patch.venue_name {
                    p.venue_name = v.clone();
                }
                if let Some(v) = &patch.address {
                    p.address = v.clone();
                }
                if let Some(v) = &patch.detail_address {
                    p.detail_address = Some(v.clone());
                }
                if let Some(v) = patch.coords {
                    p.coords = Some(v);
                }
                if let Some(v) = &patch.parking_info {
                    p.parking_info = Some(v.clone());
                }
                if let Some(v) = &patch.transport_info {
                    p.transport_info = Some(v.clone());
                }
            }
            (PayloadPatch::Rsvp(patch), BlockPayload::Rsvp(p)) => {
                if let Some(v) = &patch.title {
                    p.title = Some(v.clone());
                }
                if let Some(v) = &patch.description {
                    p.description = Some(v.clone());
                }
                if let Some(v) = &patch.due_date {
                    p.due_date = Some(v.clone());
                }
                if let Some(v) = patch.enabled {
                    p.enabled = v;
                }
            }
            (patch, payload) => {
                tracing::debug!(
                    patch_variant = %patch.variant(),
                    block_variant = %payload.variant(),
                    "payload patch variant mismatch ignored"
                );
            }
        }
    }

    pub fn variant(&self) -> BlockVariant {
        match self {
            PayloadPatch::Header(_) => BlockVariant::Header,
            PayloadPatch::Content(_) => BlockVariant::Content,
            PayloadPatch::Image(_) => BlockVariant::Image,
            PayloadPatch::Contact(_) => BlockVariant::Contact,
            PayloadPatch::Location(_) => BlockVariant::Location,
            PayloadPatch::Rsvp(_) => BlockVariant::Rsvp,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPatch {
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
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_text: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<AspectRatio>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replaces the whole contact list when present (shallow merge).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<ContactEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
