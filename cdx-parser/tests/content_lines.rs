//! Content-line classification over whole documents

use cdx_parser::cdx::classifying::PrecedenceTable;
use cdx_parser::cdx::formats::lines::to_lines_str;
use cdx_parser::cdx::lexing::{classify_lines, ContentLineClassifier, LexOptions};
use cdx_parser::cdx::loader::DocumentLoader;
use cdx_parser::cdx::testing::sample;

#[test]
fn test_prose_versus_marker() {
    assert_eq!(
        classify_lines(&["\tJust some prose.", "\t<Bar>"], "\t"),
        vec![true, false]
    );
}

#[test]
fn test_one_flag_per_line() {
    let source = sample("person.cdx");
    let flags = ContentLineClassifier::new("\t").classify_source(&source);
    assert_eq!(flags.len(), source.lines().count());
    assert_eq!(
        flags,
        vec![false, true, true, false, true, false, false, false, false, false, false]
    );
}

#[test]
fn test_lines_format_for_sample() {
    let document = DocumentLoader::from_string(sample("person.cdx"))
        .highlight()
        .unwrap();
    insta::assert_snapshot!(to_lines_str(&document).trim_end(), @r#"
    01 . <Person id=550e8400-e29b-41d4-a716-446655440000 name="Ada" born={1815-12-10} status=$Active>
    02 C →Mathematician and writer, chiefly known for her work on the
    03 C →Analytical Engine.
    04 . →[Annotation spanning
    05 C →two lines]
    06 . →<Address city="London" coordinates=(51.5072,-0.1276)/>
    07 . →<Notebook pages=1..100s5 tags=set["math","engines"] ratio=0.5p3>
    08 . →→Deeper lines are not content.
    09 . →</Notebook>
    10 . →favorite=&teal
    11 . </Person>
    "#);
}

#[test]
fn test_configured_indent_unit() {
    let source = "<A>\n    four spaces\n  two spaces\n\ttab\n</A>";
    let options = LexOptions::new(PrecedenceTable::default(), "    ").unwrap();
    let document = DocumentLoader::from_string(source)
        .highlight_with(&options)
        .unwrap();
    assert_eq!(
        document.content_lines(),
        &[false, true, false, false, false]
    );
}
