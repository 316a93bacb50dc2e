//! Attribute value reads and the element-form invariant.

use html_query::{Error, Query};

const VALUES_HTML: &str = r#"
<!DOCTYPE html>
<html>
  <body>
    <div id="anId" data-kind="panel">content</div>
    <img src="logo.png" alt="The logo">
  </body>
</html>
"#;

fn document() -> Query {
    Query::new(VALUES_HTML)
}

#[test]
fn id_select() {
    assert_eq!(document().select("#anId").expect("valid selector").len(), 1);
}

#[test]
fn value_reads_attribute_text() {
    let element = document().select("#anId").expect("valid selector").remove(0);
    assert_eq!(
        element.value("data-kind").expect("attribute present").source(),
        "panel"
    );
}

#[test]
fn value_of_selected_element_is_a_fresh_query() {
    let element = document().select("#anId").expect("valid selector").remove(0);
    let id = element.value("id").expect("attribute present");
    assert_eq!(id.to_string(), "anId");
    // The derived value is plain text, so element-only operations on it
    // are rejected.
    assert!(matches!(id.inner_html(), Err(Error::NotAnElement)));
}

#[test]
fn value_on_missing_attribute_is_an_error() {
    let element = document().select("#anId").expect("valid selector").remove(0);
    assert!(matches!(
        element.value("href"),
        Err(Error::AttributeMissing(_))
    ));
}

#[test]
fn value_on_plain_text_is_an_error() {
    assert!(matches!(
        Query::new("plain text").value("id"),
        Err(Error::NotAnElement)
    ));
}

#[test]
fn value_reads_double_quotes_only() {
    // Selectors accept single-quoted attributes; value() deliberately
    // does not. Both sides of the asymmetry are pinned down here.
    let doc = Query::new("<body><div id='anId'>x</div></body>");
    let element = doc.select("#anId").expect("valid selector").remove(0);
    assert!(matches!(
        element.value("id"),
        Err(Error::AttributeMissing(_))
    ));
}

#[test]
fn inner_html_on_plain_text_is_an_error() {
    assert!(matches!(
        Query::new("plain text").inner_html(),
        Err(Error::NotAnElement)
    ));
}

#[test]
fn selection_results_render_verbatim() {
    let element = document().select("img").expect("valid selector").remove(0);
    assert_eq!(element.to_string(), element.source());
}
