//! Block construction, duplication, validation, and order normalization.
//!
//! Every mutation in the reducer funnels ordering through [`reorder_blocks`];
//! it is the single place block orders are renumbered.

use uuid::Uuid;

use super::types::{
    AspectRatio, Block, BlockPayload, BlockVariant, ContactEntry, ContactPayload, ContentPayload,
    HeaderPayload, ImagePayload, LocationPayload, RsvpPayload,
};

/// Fresh unique block id.
pub fn new_block_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build a new block of the given variant with placeholder payload values.
pub fn create_block(variant: BlockVariant, order: usize) -> Block {
    Block {
        id: new_block_id(),
        order,
        visible: true,
        editing: false,
        style: None,
        payload: default_payload(variant),
    }
}

/// Default payload per variant. Contact blocks start with empty rows for the
/// groom and bride sides; RSVP starts enabled.
pub fn default_payload(variant: BlockVariant) -> BlockPayload {
    match variant {
        BlockVariant::Header => BlockPayload::Header(HeaderPayload::default()),
        BlockVariant::Content => BlockPayload::Content(ContentPayload::default()),
        BlockVariant::Image => BlockPayload::Image(ImagePayload {
            url: String::new(),
            alt: None,
            caption: None,
            ratio: AspectRatio::Square,
        }),
        BlockVariant::Contact => BlockPayload::Contact(ContactPayload {
            title: None,
            contacts: vec![
                ContactEntry {
                    name: String::new(),
                    relation: "신랑".to_string(),
                    phone: String::new(),
                },
                ContactEntry {
                    name: String::new(),
                    relation: "신부".to_string(),
                    phone: String::new(),
                },
            ],
        }),
        BlockVariant::Location => BlockPayload::Location(LocationPayload::default()),
        BlockVariant::Rsvp => BlockPayload::Rsvp(RsvpPayload {
            title: None,
            description: None,
            due_date: None,
            enabled: true,
        }),
    }
}

/// Deep copy of a block with a fresh id, placed immediately after the
/// original. The copy never inherits editing state.
pub fn duplicate_block(block: &Block) -> Block {
    Block {
        id: new_block_id(),
        order: block.order + 1,
        visible: block.visible,
        editing: false,
        style: block.style.clone(),
        payload: block.payload.clone(),
    }
}

/// Minimal-completeness check, used as a precondition gate before a save.
/// Never mutates and never fails hard; an incomplete block is a normal
/// editing state.
pub fn validate_block(block: &Block) -> bool {
    match &block.payload {
        BlockPayload::Header(p) => {
            !p.groom_name.trim().is_empty() && !p.bride_name.trim().is_empty()
        }
        BlockPayload::Content(p) => !p.body.trim().is_empty(),
        BlockPayload::Image(p) => !p.url.trim().is_empty(),
        BlockPayload::Contact(p) => !p.contacts.is_empty(),
        BlockPayload::Location(p) => !p.venue_name.trim().is_empty(),
        BlockPayload::Rsvp(_) => true,
    }
}

/// Stable-sort blocks by their current order and renumber to `0..N`.
/// Ties keep their existing relative position. Idempotent.
pub fn reorder_blocks(mut blocks: Vec<Block>) -> Vec<Block> {
    blocks.sort_by_key(|b| b.order);
    for (index, block) in blocks.iter_mut().enumerate() {
        block.order = index;
    }
    blocks
}

/// Display metadata for one palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub variant: BlockVariant,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

/// Static block palette shown in the editor sidebar. Covers every catalog
/// variant exactly once.
pub fn block_palette() -> &'static [PaletteEntry] {
    const PALETTE: [PaletteEntry; 6] = [
        PaletteEntry {
            variant: BlockVariant::Header,
            name: "기본 정보",
            description: "신랑·신부 이름과 예식 일시",
            icon: "💍",
            category: "필수",
        },
        PaletteEntry {
            variant: BlockVariant::Content,
            name: "글",
            description: "인사말 등 자유로운 글",
            icon: "📝",
            category: "콘텐츠",
        },
        PaletteEntry {
            variant: BlockVariant::Image,
            name: "사진",
            description: "웨딩 사진 한 장",
            icon: "📷",
            category: "콘텐츠",
        },
        PaletteEntry {
            variant: BlockVariant::Contact,
            name: "연락처",
            description: "혼주·신랑·신부 연락처 목록",
            icon: "📞",
            category: "정보",
        },
        PaletteEntry {
            variant: BlockVariant::Location,
            name: "오시는 길",
            description: "예식장 위치와 교통 안내",
            icon: "📍",
            category: "정보",
        },
        PaletteEntry {
            variant: BlockVariant::Rsvp,
            name: "참석 여부",
            description: "참석 여부 회신 받기",
            icon: "✉️",
            category: "정보",
        },
    ];
    &PALETTE
}
