//! Property testing for parsing and styling.

use ansi_block::{
    apply_codes, parse_ansi, Color, Effect, SgrCode, StylePatch, StyleSet, StyledRun, StyledText,
};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = Color> {
    (0_u8..8).prop_map(|idx| Color::from_index(idx).unwrap())
}

fn style() -> impl Strategy<Value = StyleSet> {
    (
        proptest::option::of(color()),
        proptest::option::of(color()),
        proptest::bits::u8::between(0, 3),
    )
        .prop_map(|(foreground, background, effects)| {
            let mut style = StyleSet {
                foreground,
                background,
                ..StyleSet::default()
            };
            for (i, effect) in Effect::ALL.into_iter().enumerate() {
                if effects & (1 << i) != 0 {
                    style = style.with_effect(effect);
                }
            }
            style
        })
}

fn sgr_code() -> impl Strategy<Value = SgrCode> {
    prop_oneof![
        Just(SgrCode::Reset),
        proptest::sample::select(Effect::ALL.to_vec()).prop_map(SgrCode::Effect),
        color().prop_map(SgrCode::Foreground),
        color().prop_map(SgrCode::Background),
    ]
}

fn styled_text(
    text: &'static str,
    run_count: std::ops::Range<usize>,
) -> impl Strategy<Value = StyledText> {
    let run = (text, style()).prop_map(|(text, style)| StyledRun::new(text, style));
    proptest::collection::vec(run, run_count).prop_map(StyledText::from_runs)
}

/// Removes `ESC[...m` sequences from the text; unterminated sequences are left intact.
fn strip_escapes(mut text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    while let Some(pos) = text.find("\u{1b}[") {
        let Some(body_len) = text[pos + 2..].find('m') else {
            break;
        };
        stripped.push_str(&text[..pos]);
        text = &text[pos + 2 + body_len + 1..];
    }
    stripped.push_str(text);
    stripped
}

fn text_with_escapes() -> impl Strategy<Value = String> {
    let chunk = prop_oneof![
        r"[a-z \[;m0-9]{1,4}",
        Just("\u{1b}".to_owned()),
        Just("\u{1b}[".to_owned()),
        sgr_code().prop_map(|code| format!("\u{1b}[{code}m")),
        r"\x1b\[[0-9;]{0,4}",
    ];
    proptest::collection::vec(chunk, 0..8).prop_map(|chunks| chunks.concat())
}

const VISIBLE_ASCII: &str = r"[\n\t\x20-\x7e]{1,16}";
const ANY_CHARS: &str = r"[^\x1b]{1,16}";
const CHARS_WITH_ESCAPES: &str = r"[a-z\x1b\[;m0-9]{1,16}";

proptest! {
    #[test]
    fn plain_text_is_parsed_as_single_run(text in ANY_CHARS) {
        let runs = parse_ansi(&text);
        prop_assert_eq!(runs, [StyledRun::plain(text)]);
    }

    #[test]
    fn parsing_preserves_text(text in r"[^\x1b]{0,16}", code in sgr_code(), pos in 0_usize..16) {
        let pos = pos.min(text.chars().count());
        let styled = apply_codes(&text, pos..pos + 3, &[code]);
        let parsed_text: String = parse_ansi(&styled).into_iter().map(|run| run.text).collect();
        prop_assert_eq!(parsed_text, text);
    }

    #[test]
    fn parsing_preserves_text_with_escapes(text in text_with_escapes()) {
        let parsed_text: String = parse_ansi(&text).into_iter().map(|run| run.text).collect();
        prop_assert_eq!(parsed_text, strip_escapes(&text));
    }

    #[test]
    fn lone_escapes_are_plain_text(text in r"[a-z\x1b;m0-9]{1,16}") {
        let runs = parse_ansi(&text);
        prop_assert_eq!(runs, [StyledRun::plain(text)]);
    }

    #[test]
    fn parsed_text_roundtrip(text in text_with_escapes()) {
        let doc = StyledText::from_ansi(&text);
        prop_assert_eq!(StyledText::from_ansi(&doc.to_ansi()), doc);
    }

    #[test]
    fn text_with_escapes_roundtrip(doc in styled_text(CHARS_WITH_ESCAPES, 1..5)) {
        let ansi = doc.to_ansi();
        prop_assert_eq!(StyledText::from_ansi(&ansi), doc);
    }

    #[test]
    fn ascii_text_roundtrip(doc in styled_text(VISIBLE_ASCII, 1..5)) {
        let ansi = doc.to_ansi();
        prop_assert_eq!(StyledText::from_ansi(&ansi), doc);
    }

    #[test]
    fn text_roundtrip(doc in styled_text(ANY_CHARS, 1..5)) {
        let ansi = doc.to_ansi();
        prop_assert_eq!(StyledText::from_ansi(&ansi), doc);
    }

    #[test]
    fn adjacent_runs_have_different_styles(doc in styled_text(VISIBLE_ASCII, 2..6)) {
        for window in doc.runs().windows(2) {
            let [prev, next] = window else {
                unreachable!();
            };
            prop_assert_ne!(prev.style, next.style);
            prop_assert!(!prev.text.is_empty());
            prop_assert!(!next.text.is_empty());
        }
    }

    #[test]
    fn applying_style_keeps_text_intact(
        doc in styled_text(ANY_CHARS, 1..4),
        start in 0_usize..32,
        len in 0_usize..32,
        foreground in proptest::option::of(color()),
    ) {
        let mut styled = doc.clone();
        let patch = StylePatch {
            foreground,
            ..StylePatch::effect(Effect::Bold)
        };
        styled.apply_style(start..start + len, &patch);

        prop_assert_eq!(styled.text(), doc.text());
        let end = (start + len).min(doc.char_len());
        for pos in 0..doc.char_len() {
            let style = styled.style_at(pos).unwrap();
            if (start..end).contains(&pos) {
                prop_assert!(style.has_effect(Effect::Bold));
            } else {
                prop_assert_eq!(Some(style), doc.style_at(pos));
            }
        }
    }

    #[test]
    fn replacing_range_splices_text(
        doc in styled_text(ANY_CHARS, 1..4),
        start in 0_usize..32,
        len in 0_usize..8,
        replacement in r"[^\x1b]{0,8}",
    ) {
        let mut edited = doc.clone();
        edited.replace_range(start..start + len, &replacement);

        let chars: Vec<char> = doc.text().chars().collect();
        let start = start.min(chars.len());
        let end = (start + len).min(chars.len());
        let expected: String = chars[..start]
            .iter()
            .copied()
            .chain(replacement.chars())
            .chain(chars[end..].iter().copied())
            .collect();
        prop_assert_eq!(edited.text(), expected);
    }
}
