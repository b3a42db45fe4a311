//! Integration tests for the code highlighting pipeline.
//!
//! Covers whole documents parsed from fixtures in `tests/fixtures/`, the
//! rendered markup contract, and sharing configuration across threads.

mod common;

use std::collections::BTreeSet;

use common::{load_fixture, no_grammars, passthrough};
use fenceline_lib::markdown::dsl::parse_line_range;
use fenceline_lib::markdown::highlighting::CodeHighlighter;
use fenceline_lib::markdown::output::render_block;
use fenceline_lib::markdown::{
    AliasTable, RenderOptions, highlight_markdown, html_fragments, resolve_language, transform,
};

fn guide_options() -> RenderOptions {
    let mut options = RenderOptions::default();
    options.inline_code_marker = Some("|".to_string());
    options.aliases = [("js", "javascript"), ("sh", "bash"), ("py", "python")]
        .into_iter()
        .collect();
    options
}

#[test]
fn test_range_grammar_examples() {
    let spec = parse_line_range(Some("lang{1,3-5,8}"));
    assert_eq!(spec.language, "lang");
    assert_eq!(spec.highlighted_lines, BTreeSet::from([1, 3, 4, 5, 8]));

    let spec = parse_line_range(Some("lang"));
    assert_eq!(spec.language, "lang");
    assert!(spec.highlighted_lines.is_empty());

    let spec = parse_line_range(None);
    assert_eq!(spec.language, "");
    assert!(spec.highlighted_lines.is_empty());
    assert_eq!(resolve_language(Some(spec.language.as_str()), &AliasTable::new()), "text");
}

#[test]
fn test_alias_resolution_is_case_insensitive() {
    let aliases: AliasTable = [("js", "javascript")].into_iter().collect();
    assert_eq!(resolve_language(Some("JS"), &aliases), "javascript");
}

#[test]
fn test_three_lines_one_marked() {
    let block = render_block(
        "text",
        "a\nb\nc",
        &BTreeSet::from([2]),
        "language-",
        &passthrough,
    )
    .unwrap();

    assert_eq!(
        block.html,
        "<div class=\"gatsby-highlight\" data-language=\"text\">\
         <pre class=\"language-text\"><code class=\"language-text\">\
         <span class=\"code-line\">a\n</span>\
         <span class=\"code-line gatsby-highlight-code-line\">b\n</span>\
         <span class=\"code-line\">c</span>\
         </code></pre></div>"
    );
}

#[test]
fn test_js_scenario_with_alias() {
    let mut options = RenderOptions::default();
    options.aliases.insert("js", "javascript");

    let content = "```js{2}\nconst a = 1\nconst b = 2\n```\n";
    let ast = highlight_markdown(content, &options, &passthrough).unwrap();

    assert_eq!(
        html_fragments(&ast),
        vec![
            "<div class=\"gatsby-highlight\" data-language=\"javascript\">\
             <pre class=\"language-javascript\"><code class=\"language-javascript\">\
             <span class=\"code-line\">const a = 1\n</span>\
             <span class=\"code-line gatsby-highlight-code-line\">const b = 2\n</span>\
             </code></pre></div>"
        ]
    );
}

#[test]
fn test_inline_marker_scenario() {
    let mut options = RenderOptions::default();
    options.inline_code_marker = Some("|".to_string());

    let ast = highlight_markdown("Try `ts|const x = 1`.", &options, &no_grammars).unwrap();
    assert_eq!(
        html_fragments(&ast),
        vec![r#"<code class="language-ts">const x = 1</code>"#]
    );
}

#[test]
fn test_inline_without_marker_scenario() {
    let ast = highlight_markdown("Say `plain text`.", &RenderOptions::default(), &no_grammars)
        .unwrap();
    assert_eq!(
        html_fragments(&ast),
        vec![r#"<code class="language-text">plain text</code>"#]
    );
}

#[test]
fn test_guide_fixture_without_grammars() {
    let content = load_fixture("valid/guide.md");
    let ast = highlight_markdown(&content, &guide_options(), &no_grammars).unwrap();
    let fragments = html_fragments(&ast);

    assert_eq!(fragments.len(), 6);
    assert_eq!(
        fragments[0],
        r#"<code class="language-bash">cargo install fenceline-cli</code>"#
    );

    assert!(fragments[1].contains(r#"data-language="javascript""#));
    assert_eq!(fragments[1].matches("gatsby-highlight-code-line").count(), 3);
    assert!(fragments[1].contains(
        "<span class=\"code-line gatsby-highlight-code-line\">const input = fs.readFileSync(\"README.md\", \"utf8\")\n</span>"
    ));
    assert!(fragments[1].contains(
        "<span class=\"code-line\">const lines = input.split(\"\\n\")\n</span>"
    ));

    assert_eq!(fragments[2], r#"<code class="language-text">plain</code>"#);
    assert!(fragments[3].contains(r#"data-language="python""#));
    assert!(fragments[4].contains(r#"data-language="text""#));

    assert!(fragments[5].contains(r#"data-language="ts""#));
    assert!(!fragments[5].contains("gatsby-highlight-code-line"));
}

#[test]
fn test_guide_fixture_with_syntect() {
    let content = load_fixture("valid/guide.md");
    let ast = highlight_markdown(&content, &guide_options(), &CodeHighlighter::new()).unwrap();
    let fragments = html_fragments(&ast);

    assert_eq!(fragments.len(), 6);
    assert!(fragments[0].starts_with(r#"<code class="language-bash"><span class="source shell"#));
    assert!(fragments[1].contains(r#"<span class="source js">"#));
    assert_eq!(fragments[1].matches("gatsby-highlight-code-line").count(), 3);
    // No grammar for plain text: content is kept verbatim.
    assert_eq!(fragments[2], r#"<code class="language-text">plain</code>"#);
    assert!(fragments[3].contains(r#"<span class="source python">"#));
    assert!(fragments[4].contains("no language here"));
}

#[test]
fn test_simple_fixture_lines_are_balanced() {
    let content = load_fixture("valid/simple.md");
    let ast = highlight_markdown(&content, &RenderOptions::default(), &CodeHighlighter::new())
        .unwrap();
    let block = html_fragments(&ast)[0];

    let body = block
        .strip_prefix(
            r#"<div class="gatsby-highlight" data-language="rust"><pre class="language-rust"><code class="language-rust">"#,
        )
        .and_then(|rest| rest.strip_suffix("</code></pre></div>"))
        .unwrap();

    assert_eq!(body.matches("<span").count(), body.matches("</span>").count());
    assert!(body.starts_with(r#"<span class="code-line gatsby-highlight-code-line"><span class="source rust">"#));
    assert_eq!(body.matches(r#"<span class="code-line"#).count(), 3);
}

#[test]
fn test_transform_twice_is_noop() {
    let content = load_fixture("valid/guide.md");
    let mut ast = highlight_markdown(&content, &guide_options(), &no_grammars).unwrap();
    let first = ast.clone();

    let stats = transform(&mut ast, &guide_options(), &no_grammars).unwrap();
    assert_eq!(stats.total(), 0);
    assert_eq!(ast, first);
}

#[test]
fn test_concurrent_documents_share_configuration() {
    let options = guide_options();
    let highlighter = CodeHighlighter::new();
    let documents = vec![
        load_fixture("valid/guide.md"),
        load_fixture("valid/simple.md"),
        "```py{1}\nprint(1)\n```\n".to_string(),
        "`js|let a`".to_string(),
    ];

    let sequential: Vec<Vec<String>> = documents
        .iter()
        .map(|doc| {
            let ast = highlight_markdown(doc, &options, &highlighter).unwrap();
            html_fragments(&ast).into_iter().map(str::to_string).collect()
        })
        .collect();

    let concurrent: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|doc| {
                let options = &options;
                let highlighter = &highlighter;
                scope.spawn(move || {
                    let ast = highlight_markdown(doc, options, highlighter).unwrap();
                    html_fragments(&ast)
                        .into_iter()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn test_failed_document_does_not_affect_others() {
    use fenceline_lib::markdown::{HighlightError, HighlightResult};

    let flaky = |language: &str, source: &str| -> HighlightResult<String> {
        if language == "boom" {
            Err(HighlightError::Tokenize("exploded".to_string()))
        } else {
            Ok(source.to_string())
        }
    };

    let options = RenderOptions::default();
    let bad = highlight_markdown("```boom\nx\n```\n", &options, &flaky);
    let good = highlight_markdown("```ok\nx\n```\n", &options, &flaky);

    assert!(matches!(bad, Err(HighlightError::Tokenize(_))));
    assert_eq!(html_fragments(&good.unwrap()).len(), 1);
}
