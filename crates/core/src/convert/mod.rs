//! Bidirectional mapping between the block model and the legacy
//! "wedding-info + freeform elements" persistence shape.
//!
//! The legacy format is variant-blind and absolutely positioned; keeping the
//! conversion here lets the reducer's ordering invariants stay simple.

pub mod from_legacy;
pub mod title;
pub mod to_legacy;

pub use from_legacy::{
    from_legacy, CONTACT_BLOCK_ID, HEADER_BLOCK_ID, LOCATION_BLOCK_ID, RSVP_BLOCK_ID,
};
pub use title::{extract_title, FALLBACK_TITLE};
pub use to_legacy::to_legacy;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::factory::create_block;
    use crate::block::types::{Block, BlockPayload, BlockVariant, HeaderPayload, LocationPayload};

    fn sample_blocks() -> Vec<Block> {
        let mut header = create_block(BlockVariant::Header, 0);
        header.payload = BlockPayload::Header(HeaderPayload {
            groom_name: "철수".to_string(),
            bride_name: "영희".to_string(),
            wedding_date: "2026-10-24".to_string(),
            wedding_time: "13:00".to_string(),
            subtitle: Some("저희 결혼합니다".to_string()),
        });

        let mut location = create_block(BlockVariant::Location, 1);
        location.payload = BlockPayload::Location(LocationPayload {
            venue_name: "그랜드홀".to_string(),
            address: "서울시 강남구".to_string(),
            ..LocationPayload::default()
        });

        let mut content = create_block(BlockVariant::Content, 2);
        if let BlockPayload::Content(p) = &mut content.payload {
            p.title = Some("인사말".to_string());
            p.body = "소중한 분들을 초대합니다.".to_string();
        }

        vec![header, location, content]
    }

    #[test]
    fn round_trip_preserves_payloads() {
        let blocks = sample_blocks();
        let restored = from_legacy(&to_legacy(&blocks));

        assert_eq!(restored.len(), 3);
        assert_eq!(restored[0].payload, blocks[0].payload);
        assert_eq!(restored[1].payload, blocks[1].payload);
        match (&restored[2].payload, &blocks[2].payload) {
            (BlockPayload::Content(got), BlockPayload::Content(want)) => {
                assert_eq!(got.body, want.body);
                assert_eq!(got.title, want.title);
            }
            other => panic!("unexpected payloads {other:?}"),
        }
    }

    #[test]
    fn repeated_round_trips_are_idempotent() {
        let once = from_legacy(&to_legacy(&sample_blocks()));
        let twice = from_legacy(&to_legacy(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn round_trip_title_extraction() {
        let restored = from_legacy(&to_legacy(&sample_blocks()));
        assert_eq!(extract_title(&restored), "철수 ♥ 영희");
    }
}
