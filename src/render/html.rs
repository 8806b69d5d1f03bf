//! HTML serialization of node descriptors

use super::node::{Element, Node};

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "source"];

/// Serialize a sequence of nodes
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Full HTML page with `body` as the content of `<body>`
///
/// Each script is emitted verbatim in its own `<script>` element after the
/// body content.
pub fn render_page(title: &str, body: &str, scripts: &[&str]) -> String {
    let scripts: String = scripts
        .iter()
        .map(|script| format!("<script>\n{}\n</script>\n", script))
        .collect();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n{}</body>\n</html>\n",
        escape_text(title),
        body,
        scripts
    )
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag);

    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }

    if !element.styles.is_empty() {
        let style = element
            .styles
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(" style=\"");
        out.push_str(&escape_attr(&style));
        out.push('"');
    }

    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag) {
        return;
    }

    for child in &element.children {
        write_node(out, child);
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_with_attrs_and_styles() {
        let node: Node = Element::new("div")
            .class("track")
            .style("flex", "1")
            .style("min-width", "250px")
            .child(Element::new("audio").flag("controls").attr("src", "a b.mp3"))
            .into();

        assert_eq!(
            render_nodes(&[node]),
            r#"<div class="track" style="flex: 1; min-width: 250px"><audio controls src="a b.mp3"></audio></div>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let node: Node = Element::new("h3").text("Rock & <Roll>").into();
        assert_eq!(render_nodes(&[node]), "<h3>Rock &amp; &lt;Roll&gt;</h3>");
    }

    #[test]
    fn test_attr_quotes_are_escaped() {
        let node: Node = Element::new("audio").attr("src", "say \"hi\".mp3").into();
        assert_eq!(
            render_nodes(&[node]),
            r#"<audio src="say &quot;hi&quot;.mp3"></audio>"#
        );
    }

    #[test]
    fn test_page_shell() {
        let page = render_page("Songs & Scores", "<div id=\"music-library\"></div>", &[]);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Songs &amp; Scores</title>"));
        assert!(page.contains("<div id=\"music-library\"></div>"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_page_scripts_are_not_escaped() {
        let page = render_page("x", "<p>body</p>", &["if (a < b && c) run();"]);
        assert!(page.contains("<p>body</p>\n<script>\nif (a < b && c) run();\n</script>\n</body>"));
    }
}
