//! Lines format
//!
//! One row per source line: line number, `C` for content lines or `.` otherwise, and the
//! line with tabs made visible as `→`.

use super::registry::{FormatError, Formatter};
use crate::cdx::rendering::HighlightedDocument;

pub fn to_lines_str(document: &HighlightedDocument) -> String {
    let source = document.source();
    document
        .line_spans()
        .into_iter()
        .zip(document.content_lines())
        .enumerate()
        .map(|(index, (span, is_content))| {
            let flag = if *is_content { 'C' } else { '.' };
            format!(
                "{:02} {} {}\n",
                index + 1,
                flag,
                source[span].replace('\t', "→")
            )
        })
        .collect()
}

pub struct LinesFormatter;

impl Formatter for LinesFormatter {
    fn name(&self) -> &str {
        "lines"
    }

    fn description(&self) -> &str {
        "Content-line flag for every source line"
    }

    fn serialize(&self, document: &HighlightedDocument) -> Result<String, FormatError> {
        Ok(to_lines_str(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdx::transforms::standard::HIGHLIGHT;

    #[test]
    fn test_lines() {
        let document = HIGHLIGHT
            .run("<A>\n\tprose\n\t<B/>\n</A>".to_string())
            .unwrap();
        insta::assert_snapshot!(to_lines_str(&document).trim_end(), @r"
        01 . <A>
        02 C →prose
        03 . →<B/>
        04 . </A>
        ");
    }
}
