//! Anki-importable cloze cards with word-by-word translations.
//!
//! Each curriculum sentence becomes one card per fragment: the full
//! sentence and its full translation, with the focused fragment
//! highlighted on both sides. Front and back are separated by `;`.

use crate::translate::{Fragment, TranslateError, Translator};
use curriculum_core::CurriculumStep;

/// Render every curriculum step, fetching one translation per sentence.
pub async fn render(
    steps: &[CurriculumStep],
    translator: &Translator,
) -> Result<String, TranslateError> {
    let mut out = String::new();
    for step in steps {
        let fragments = translator.word_by_word(&step.display_text).await?;
        for line in card_lines(&fragments) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    Ok(out)
}

/// One cloze line per fragment of a translated sentence.
pub fn card_lines(fragments: &[Fragment]) -> Vec<String> {
    (0..fragments.len())
        .map(|i| cloze_line(fragments, i))
        .collect()
}

fn cloze_line(fragments: &[Fragment], focus: usize) -> String {
    let mut line = String::new();
    for (j, fragment) in fragments.iter().enumerate() {
        if j == focus {
            line.push_str("<b><u>");
        }
        line.push_str(&fragment.source);
        line.push(' ');
        if j == focus {
            line.push_str("</u></b>");
        }
    }
    line.push(';');
    for (j, fragment) in fragments.iter().enumerate() {
        if j == focus {
            line.push_str("<b><u>");
        }
        line.push_str(&fragment.translation);
        line.push(' ');
        if j == focus {
            line.push_str("</u></b>");
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fragments() -> Vec<Fragment> {
        vec![
            Fragment {
                source: "the cat".to_string(),
                translation: "кот".to_string(),
            },
            Fragment {
                source: "sat".to_string(),
                translation: "сидел".to_string(),
            },
        ]
    }

    #[test]
    fn highlights_the_focused_fragment_on_both_sides() {
        let line = cloze_line(&fragments(), 0);
        assert_eq!(line, "<b><u>the cat </u></b>sat ;<b><u>кот </u></b>сидел ");
    }

    #[test]
    fn one_line_per_fragment() {
        let lines = card_lines(&fragments());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "the cat <b><u>sat </u></b>;кот <b><u>сидел </u></b>");
    }

    #[test]
    fn no_fragments_no_lines() {
        assert!(card_lines(&[]).is_empty());
    }
}
