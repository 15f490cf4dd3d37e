use crate::{foundation::config::LayoutConfig, text::input::RevealText};

/// Marker appended to anything cut short.
pub const ELLIPSIS: &str = "...";

/// Wrap `text` into at most `cfg.max_lines` lines of at most
/// `cfg.max_line_length` characters.
///
/// Words are split on single spaces, so runs of spaces survive as empty
/// words. Over-long words are cut to leave room for an ellipsis. Packing is
/// greedy; when the last allowed line overflows, that line is closed with an
/// ellipsis and the remaining words are dropped. Empty text yields one empty
/// line.
#[tracing::instrument(level = "trace", skip_all, fields(text = %text))]
pub fn wrap_lines(text: &RevealText, cfg: &LayoutConfig) -> Vec<String> {
    let max = cfg.max_line_length;
    let mut lines: Vec<String> = Vec::with_capacity(cfg.max_lines);

    for word in text
        .as_str()
        .split(' ')
        .map(|w| truncate_word(w, max))
    {
        let Some(current_len) = lines.last().map(String::len) else {
            lines.push(word);
            continue;
        };

        if current_len + 1 + word.len() <= max {
            if let Some(last) = lines.last_mut() {
                last.push(' ');
                last.push_str(&word);
            }
            continue;
        }

        if lines.len() < cfg.max_lines {
            lines.push(word);
            continue;
        }

        if let Some(last) = lines.last_mut() {
            close_with_ellipsis(last, max);
        }
        break;
    }

    lines
}

fn truncate_word(word: &str, max: usize) -> String {
    if word.len() <= max {
        return word.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    format!("{}{ELLIPSIS}", &word[..keep])
}

// The line holds only ASCII (RevealText), so byte offsets are char offsets.
fn close_with_ellipsis(line: &mut String, max: usize) {
    if line.len() + 1 + ELLIPSIS.len() <= max {
        line.push(' ');
        line.push_str(ELLIPSIS);
        return;
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    line.truncate(keep);
    line.push_str(ELLIPSIS);
}

#[cfg(test)]
#[path = "../../tests/unit/layout/lines.rs"]
mod tests;
