//! Renders content blocks written in markdown.
//!
//! Raw HTML in the source is escaped, not rendered, so an admin cannot
//! inject scripts into public pages.

use pulldown_cmark::{Options, Parser, html};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = render_markdown(&props.text);

    html! {
        <div class={classes!("prose", "prose-neutral", "max-w-none", props.class.clone())}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

pub fn render_markdown(markdown: &str) -> String {
    // ENABLE_RAW_HTML stays off
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw)
        | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        event => event,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_html_is_escaped() {
        let rendered = render_markdown("Ahoj <script>alert(1)</script>");
        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn emphasis_is_rendered() {
        assert_eq!(
            render_markdown("**nové kurzy**"),
            "<p><strong>nové kurzy</strong></p>\n"
        );
    }
}
