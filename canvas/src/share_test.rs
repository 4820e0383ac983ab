#![allow(clippy::float_cmp)]

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use super::*;
use crate::doc::ElementStore;

fn btoa(json: &str) -> String {
    STANDARD.encode(json.as_bytes())
}

fn url_token(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

// =============================================================
// Meme
// =============================================================

#[test]
fn meme_round_trip_preserves_state() {
    let mut store = ElementStore::default();
    let id = store.create(crate::doc::ElementDraft { text: "ünïcode & emoji 🎉\nline two".into(), ..Default::default() });
    let token = encode_meme(3, store.elements()).unwrap();

    let decoded = decode_meme(&token).unwrap();
    assert_eq!(decoded.template_index, 3);
    assert_eq!(decoded.elements, store.elements());
    assert!(decoded.elements.iter().any(|e| e.id == id));
}

#[test]
fn meme_token_is_url_safe() {
    let store = ElementStore::default();
    let token = encode_meme(0, store.elements()).unwrap();
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn meme_token_carries_version() {
    let store = ElementStore::default();
    let token = encode_meme(0, store.elements()).unwrap();
    let json = String::from_utf8(URL_SAFE_NO_PAD.decode(token).unwrap()).unwrap();
    assert!(json.starts_with("{\"v\":1,"));
}

#[test]
fn meme_legacy_btoa_token_decodes() {
    let json = r##"{"t":2,"e":[{"id":1,"text":"Top Text","x":50,"y":50,"fontSize":48,"color":"#FFFFFF","font":"Arial","bold":true}]}"##;
    let decoded = decode_meme(&btoa(json)).unwrap();
    assert_eq!(decoded.template_index, 2);
    assert_eq!(decoded.elements.len(), 1);
    assert_eq!(decoded.elements[0].text, "Top Text");
    assert_eq!(decoded.elements[0].x, 50.0);
}

#[test]
fn meme_legacy_token_with_space_for_plus_decodes() {
    // Find a payload whose standard encoding contains '+'.
    let mut json = String::new();
    for n in 0..200 {
        let candidate = format!(
            r##"{{"t":0,"e":[{{"id":1,"text":"{}","x":1,"y":2,"fontSize":20,"color":"#fff","font":"Arial","bold":false}}]}}"##,
            "~".repeat(n)
        );
        if btoa(&candidate).contains('+') {
            json = candidate;
            break;
        }
    }
    assert!(!json.is_empty());
    let mangled = btoa(&json).replace('+', " ");
    assert!(decode_meme(&mangled).is_ok());
}

#[test]
fn meme_missing_template_index_defaults_to_first() {
    let json = r##"{"e":[{"id":5,"text":"x","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    assert_eq!(decode_meme(&url_token(json)).unwrap().template_index, 0);
}

#[test]
fn meme_truncated_token_is_error() {
    let store = ElementStore::default();
    let token = encode_meme(0, store.elements()).unwrap();
    let truncated = &token[..token.len() / 2];
    assert!(decode_meme(truncated).is_err());
}

#[test]
fn meme_garbage_is_error() {
    assert!(matches!(decode_meme("!!!not base64!!!"), Err(ShareError::Base64(_))));
    assert!(matches!(decode_meme(&url_token("not json")), Err(ShareError::Json(_))));
    assert!(matches!(decode_meme(&url_token("[1,2,3]")), Err(ShareError::Json(_))));
    assert!(decode_meme("").is_err());
}

#[test]
fn meme_missing_elements_is_error() {
    assert!(matches!(decode_meme(&url_token(r#"{"v":1,"t":0}"#)), Err(ShareError::Json(_))));
}

#[test]
fn meme_empty_elements_is_error() {
    assert!(matches!(decode_meme(&url_token(r#"{"v":1,"t":0,"e":[]}"#)), Err(ShareError::NoElements)));
}

#[test]
fn meme_malformed_element_is_error() {
    let json = r#"{"v":1,"t":0,"e":[{"id":1,"text":"x"}]}"#;
    assert!(matches!(decode_meme(&url_token(json)), Err(ShareError::Json(_))));
}

#[test]
fn meme_duplicate_ids_rejected() {
    let json = r##"{"v":1,"t":0,"e":[
        {"id":1,"text":"a","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false},
        {"id":1,"text":"b","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    assert!(matches!(decode_meme(&url_token(json)), Err(ShareError::DuplicateId(1))));
}

#[test]
fn meme_zero_font_size_rejected() {
    let json = r##"{"v":1,"t":0,"e":[{"id":9,"text":"a","x":0,"y":0,"fontSize":0,"color":"#000","font":"Arial","bold":false}]}"##;
    assert!(matches!(decode_meme(&url_token(json)), Err(ShareError::ZeroFontSize(9))));
}

#[test]
fn meme_negative_font_size_rejected() {
    let json = r##"{"v":1,"t":0,"e":[{"id":9,"text":"a","x":0,"y":0,"fontSize":-4,"color":"#000","font":"Arial","bold":false}]}"##;
    assert!(decode_meme(&url_token(json)).is_err());
}

#[test]
fn meme_template_out_of_range_rejected() {
    let json = r##"{"v":1,"t":42,"e":[{"id":1,"text":"a","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    assert!(matches!(decode_meme(&url_token(json)), Err(ShareError::UnknownTemplate(42))));
}

#[test]
fn meme_negative_template_index_rejected() {
    let json = r##"{"v":1,"t":-1,"e":[{"id":1,"text":"a","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    assert!(matches!(decode_meme(&url_token(json)), Err(ShareError::UnknownTemplate(-1))));
}

#[test]
fn meme_legacy_template_out_of_range_falls_back() {
    let json = r##"{"t":9,"e":[{"id":1,"text":"a","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    let decoded = decode_meme(&btoa(json)).unwrap();
    assert_eq!(decoded.template_index, 0);
    assert_eq!(decoded.elements[0].text, "a");
}

#[test]
fn meme_legacy_null_template_falls_back() {
    let json = r##"{"t":null,"e":[{"id":1,"text":"a","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    assert_eq!(decode_meme(&btoa(json)).unwrap().template_index, 0);
}

#[test]
fn meme_max_element_id_rejected() {
    let json = r##"{"v":1,"t":0,"e":[{"id":4294967295,"text":"a","x":0,"y":0,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    assert!(matches!(decode_meme(&url_token(json)), Err(ShareError::IdOutOfRange(ElementId::MAX))));
}

#[test]
fn meme_future_version_rejected() {
    let json = r#"{"v":2,"whatever":true}"#;
    assert!(matches!(decode_meme(&url_token(json)), Err(ShareError::UnsupportedVersion(2))));
}

#[test]
fn meme_negative_position_accepted() {
    let json = r##"{"v":1,"t":0,"e":[{"id":1,"text":"a","x":-30,"y":-5.5,"fontSize":20,"color":"#000","font":"Arial","bold":false}]}"##;
    let decoded = decode_meme(&url_token(json)).unwrap();
    assert_eq!(decoded.elements[0].y, -5.5);
}

// =============================================================
// Poster
// =============================================================

#[test]
fn poster_round_trip_preserves_shared_fields() {
    let poster = PosterState {
        heading: "GRAND\nOPENING".into(),
        subheading: "This weekend".into(),
        body: "Free coffee".into(),
        bg_color: "linear-gradient(135deg, #FFD700, #FFA500)".into(),
        text_color: "#000000".into(),
        ..PosterState::default()
    };
    let token = encode_poster(&poster).unwrap();
    let mut target = PosterState::default();
    decode_poster(&token).unwrap().apply_to(&mut target);
    assert_eq!(target.heading, poster.heading);
    assert_eq!(target.subheading, poster.subheading);
    assert_eq!(target.body, poster.body);
    assert_eq!(target.bg_color, poster.bg_color);
    assert_eq!(target.text_color, poster.text_color);
}

#[test]
fn poster_legacy_token_keeps_missing_fields() {
    let json = r#"{"t":"My Poster","h":"Only heading"}"#;
    let mut target = PosterState { body: "kept body".into(), ..PosterState::default() };
    decode_poster(&btoa(json)).unwrap().apply_to(&mut target);
    assert_eq!(target.heading, "Only heading");
    assert_eq!(target.body, "kept body");
    assert_eq!(target.bg_color, "#FFFFFF");
}

#[test]
fn poster_legacy_empty_fields_keep_current_values() {
    let json = r#"{"h":"","s":"New sub","b":"","c":""}"#;
    let mut target = PosterState::default();
    decode_poster(&btoa(json)).unwrap().apply_to(&mut target);
    assert_eq!(target.heading, "Your Heading Here");
    assert_eq!(target.subheading, "New sub");
    assert_eq!(target.body, "Add your message or content here");
    assert_eq!(target.bg_color, "#FFFFFF");
}

#[test]
fn poster_versioned_empty_field_is_kept_empty() {
    let poster = PosterState { body: String::new(), ..PosterState::default() };
    let mut target = PosterState { body: "old".into(), ..PosterState::default() };
    decode_poster(&encode_poster(&poster).unwrap()).unwrap().apply_to(&mut target);
    assert_eq!(target.body, "");
}

#[test]
fn poster_bad_token_is_error() {
    assert!(decode_poster("%%%").is_err());
    assert!(decode_poster(&url_token(r#"{"h": 5}"#)).is_err());
    assert!(matches!(decode_poster(&url_token(r#"{"v":7}"#)), Err(ShareError::UnsupportedVersion(7))));
}

// =============================================================
// share_url
// =============================================================

#[test]
fn share_url_joins_parts() {
    assert_eq!(share_url("https://memes.test", MEME_SHARE_PATH, "abc"), "https://memes.test/create?share=abc");
    assert_eq!(share_url("https://memes.test/", POSTER_SHARE_PATH, "xyz"), "https://memes.test/poster?share=xyz");
}
