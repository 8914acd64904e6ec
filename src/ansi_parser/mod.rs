//! Lenient parser for strings with embedded SGR escape sequences.

use crate::{
    sgr::{SgrCode, CSI, ESC, SGR_FINAL},
    style::{StyleSet, StyledRun},
};


/// Parses a string with SGR escapes into a sequence of styled runs.
#[derive(Debug, Default)]
pub(crate) struct AnsiParser {
    runs: Vec<StyledRun>,
    current_style: StyleSet,
}

impl AnsiParser {
    pub(crate) fn parse(text: &str) -> Vec<StyledRun> {
        let mut this = Self::default();
        this.process(text);
        this.into_runs()
    }

    fn write_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.style == self.current_style => last.text.push_str(text),
            _ => self.runs.push(StyledRun::new(text, self.current_style)),
        }
    }

    fn process(&mut self, text: &str) {
        let mut written_end = 0;
        let mut search_start = 0;
        while let Some(offset) = text[search_start..].find(ESC) {
            let esc_pos = search_start + offset;
            let body_start = esc_pos + ESC.len_utf8();
            if !text[body_start..].starts_with(CSI) {
                // A lone `ESC` is ordinary text.
                search_start = body_start;
                continue;
            }
            let body_start = body_start + CSI.len_utf8();

            let Some(body_len) = text[body_start..].find(SGR_FINAL) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    pos = esc_pos,
                    "unterminated escape sequence; treating the remainder as text"
                );
                break;
            };

            self.write_text(&text[written_end..esc_pos]);
            self.update_style(&text[body_start..body_start + body_len]);
            written_end = body_start + body_len + SGR_FINAL.len_utf8();
            search_start = written_end;
        }
        self.write_text(&text[written_end..]);
    }

    fn update_style(&mut self, body: &str) {
        for param in body.split(';') {
            if let Some(code) = SgrCode::from_param(param) {
                self.current_style.update(code);
            }
        }
    }

    fn into_runs(self) -> Vec<StyledRun> {
        if self.runs.is_empty() {
            vec![StyledRun::default()]
        } else {
            self.runs
        }
    }
}
