//! Standalone HTML card document, one card per curriculum step.

use curriculum_core::CurriculumStep;
use std::fmt::Write;

const HEAD: &str = r#"<!DOCTYPE html>
<html dir="auto">
<head>
<meta charset="UTF-8">
<style>
p {
  font-size: 22px;
  font-family: serif;
  padding-bottom: 32px;
}

.card {
  page-break-inside: avoid;
  margin-right: 16%;
  margin-left: 16%;
}
</style>
<title>Text Document</title>
</head>
<body>
"#;

const FOOT: &str = "</body>\n</html>\n";

pub fn render(steps: &[CurriculumStep]) -> String {
    let mut out = String::from(HEAD);
    for step in steps {
        let _ = writeln!(out, r#"<div class="card">"#);
        let _ = writeln!(out, "<h4>{}</h4>", step.step);
        let _ = writeln!(out, "<p>{}</p>", step.display_text);
        let _ = writeln!(out, "<hr>");
        let _ = writeln!(out, "</div>");
    }
    out.push_str(FOOT);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_core::{build_curriculum, Corpus, CurriculumConfig};

    #[test]
    fn renders_one_card_per_step() {
        let corpus = Corpus::from_text("red fox jumps. blue hen rests.").unwrap();
        let steps = build_curriculum(&corpus, &CurriculumConfig::default());
        let out = render(&steps);

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.ends_with("</html>\n"));
        assert_eq!(out.matches(r#"<div class="card">"#).count(), 2);
        assert!(out.contains("<h4>1</h4>"));
        assert!(out.contains("<p>red fox jumps</p>"));
    }
}
