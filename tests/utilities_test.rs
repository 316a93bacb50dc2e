//! Extraction and flatten behavior over a markup-heavy document.

use html_query::{between, Query};

const MARKUP_HTML: &str = r#"
<!DOCTYPE html>
<html>
  <head><title>Markup</title></head>
  <body>
    <div id="wrapper" style="background:url(bg.jpg)">
      <p><a href="/home">Content</a></p>
    </div>
  </body>
</html>
"#;

fn document() -> Query {
    Query::new(MARKUP_HTML)
}

#[test]
fn between_parse() {
    let style = document()
        .select("#wrapper")
        .expect("valid selector")
        .first()
        .expect("wrapper element present")
        .value("style")
        .expect("style attribute present")
        .to_string();
    assert_eq!(between(&style, '(', ')'), Some("bg.jpg"));
}

#[test]
fn toplevel_flatten() {
    let flat = document()
        .select("html")
        .expect("valid selector")
        .first()
        .expect("document has an html element")
        .flatten()
        .expect("element form");
    assert_eq!(
        flat.inner_html().expect("element form").source().trim(),
        ""
    );
}

#[test]
fn flatten_of_flat_fragment_is_identity() {
    let flat = document()
        .select("p")
        .expect("valid selector")
        .first()
        .expect("paragraph present")
        .inner_html()
        .expect("element form");
    assert_eq!(
        flat.to_string(),
        flat.flatten().expect("flat fragment").to_string()
    );
}

#[test]
fn flatten_is_idempotent() {
    let element = document()
        .select("body")
        .expect("valid selector")
        .remove(0);
    let once = element.flatten().expect("element form");
    let twice = once.flatten().expect("element form");
    assert_eq!(once, twice);
}

#[test]
fn flatten_of_leaf_element_keeps_inner_content() {
    let leaf = Query::new("<p>just text</p>");
    assert_eq!(
        leaf.flatten()
            .expect("element form")
            .inner_html()
            .expect("element form")
            .source(),
        leaf.inner_html().expect("element form").source()
    );
}

#[test]
fn strip_html() {
    let text = document()
        .select("p")
        .expect("valid selector")
        .first()
        .expect("paragraph present")
        .strip_html();
    assert_eq!(text.trim(), "Content");
}

#[test]
fn strip_html_decodes_entities() {
    assert_eq!(Query::new("<p>A &amp; B</p>").strip_html(), "A & B");
}

#[test]
fn inner_text_flattens_inline_markup() {
    let doc = Query::new("<div>Hello <b>World</b></div>");
    assert_eq!(doc.inner_text().expect("element form"), "Hello World");
}

#[test]
fn unterminated_tag_yields_degenerate_span() {
    // A void element never closes; its span runs to the next same-named
    // open tag. Documented leniency, not a crash.
    let doc = Query::new("<body>line one<br>line two<br>end</body>");
    let breaks = doc.select("br").expect("valid selector");
    assert_eq!(breaks.len(), 2);
    assert_eq!(breaks[0].source(), "<br>line two");
}
