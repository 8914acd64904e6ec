//! Tests reading and writing options and styled runs with `serde`.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;

use ansi_block::{parse_ansi, HtmlOptions, NamedPalette, Palette, RgbColor};

#[test]
fn reading_html_options_from_toml() -> anyhow::Result<()> {
    let options: HtmlOptions = toml::from_str(
        r##"
        [palette.colors]
        black = "#000000"
        red = "#cd0000"
        green = "#00cd00"
        yellow = "#cdcd00"
        blue = "#0000ee"
        magenta = "#cd00cd"
        cyan = "#00cdcd"
        white = "#e5e5e5"
        "##,
    )?;
    assert_eq!(options.palette, Palette::from(NamedPalette::Xterm));
    assert_eq!(options.palette.colors.blue, RgbColor(0, 0, 0xee));
    Ok(())
}

#[test]
fn html_options_default_to_chat_palette() -> anyhow::Result<()> {
    let options: HtmlOptions = toml::from_str("")?;
    assert_eq!(options, HtmlOptions::default());
    assert_eq!(options.palette.colors.red, RgbColor(0xff, 0x55, 0x55));
    Ok(())
}

#[test]
fn invalid_palette_color_is_rejected() {
    let err = toml::from_str::<HtmlOptions>(
        r#"
        [palette.colors]
        black = "black"
        "#,
    )
    .unwrap_err();
    assert_matches!(err.message(), msg if msg.contains("missing '#' prefix"));
}

#[test]
fn html_options_roundtrip_via_json() -> anyhow::Result<()> {
    let options = HtmlOptions::default().with_palette(NamedPalette::Ubuntu.into());
    let json = serde_json::to_value(&options)?;
    assert_eq!(json["palette"]["colors"]["yellow"], "#ffc706");

    let restored: HtmlOptions = serde_json::from_value(json)?;
    assert_eq!(restored, options);
    Ok(())
}

#[test]
fn serializing_styled_runs() -> anyhow::Result<()> {
    let runs = parse_ansi("\u{1b}[31;44;1mhi\u{1b}[0m there");
    let json = serde_json::to_value(&runs)?;
    assert_eq!(
        json,
        json!([
            { "text": "hi", "bold": true, "foreground": "red", "background": "blue" },
            { "text": " there" },
        ])
    );
    Ok(())
}
