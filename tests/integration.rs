//! Integration tests for mdfrag.
//!
//! These tests compose whole documents out of fragments, the way callers
//! of the builder are expected to.

use mdfrag_builder::{
    bold, code, code_block, doc, escape, for_each, h1, h2, if_, if_else, img, italic, link, ol,
    quote, strikethrough, task, ul, HR, L,
};

struct Release {
    version: &'static str,
    yanked: bool,
    notes: Vec<&'static str>,
}

fn releases() -> Vec<Release> {
    vec![
        Release {
            version: "0.2.0",
            yanked: false,
            notes: vec!["faster escaping", "new `task` helper"],
        },
        Release {
            version: "0.1.1",
            yanked: true,
            notes: vec!["broken build"],
        },
    ]
}

#[test]
fn test_changelog_document() {
    let changelog = doc([
        h1(["Changelog"]),
        for_each(releases(), |release| {
            doc([
                h2([if_else(
                    release.yanked,
                    strikethrough([release.version]),
                    release.version.to_string(),
                )]),
                ul(release.notes.iter().map(|note| escape(note))),
                L.to_string(),
            ])
        }),
    ]);

    assert_eq!(
        changelog,
        "# Changelog\n\
         ## 0.2.0\n\
         - faster escaping\n\
         - new \\`task\\` helper\n\
         ## ~~0.1.1~~\n\
         - broken build\n"
    );
}

#[test]
fn test_readme_document() {
    let show_badge = false;
    let readme = doc([
        h1(["mdfrag"]),
        if_(show_badge, [img("badge.svg", "build")]),
        quote(["Markdown ", italic(["fragments"]).as_str(), ", composed."]),
        L.to_string(),
        h2(["Usage"]),
        code_block("rust", "let s = bold([\"hi\"]);"),
        HR.to_string(),
        "See ".to_string(),
        link("https://docs.rs/mdfrag", "the docs"),
        ".".to_string(),
    ]);

    assert_eq!(
        readme,
        "# mdfrag\n\
         > Markdown *fragments*, composed.\n\
         \n\
         ## Usage\n\
         \n\
         ```rust\n\
         let s = bold([\"hi\"]);\n\
         ```\n\
         \n\
         \n\
         ---\n\
         \n\
         See [the docs](https://docs.rs/mdfrag)."
    );
}

#[test]
fn test_task_list_from_records() {
    let todo = [("write tests", true), ("publish", false), ("celebrate", false)];
    let list = for_each(todo, |(what, done)| task(done, [what]));
    assert_eq!(
        list,
        "- [x] write tests\n- [ ] publish\n- [ ] celebrate\n"
    );
}

#[test]
fn test_inline_mix_in_sentence() {
    let sentence = doc([
        "Run",
        code(" cargo test ").as_str(),
        "and check that ",
        bold(["all "]).as_str(),
        "pass.",
    ]);
    assert_eq!(sentence, "Run `cargo test` and check that **all** pass.");
}

#[test]
fn test_numbered_steps_with_nested_emphasis() {
    let steps = ol([
        doc(["Install ", bold([italic(["everything"])]).as_str()]),
        "Configure".to_string(),
    ]);
    assert_eq!(steps, "1. Install ***everything***\n2. Configure");
}

#[test]
fn test_escaped_user_input_in_heading() {
    let title = "C# & F#: *notes*";
    assert_eq!(h2([escape(title)]), "## C\\# \\& F\\#\\: \\*notes\\*\n");
}
