//! End-to-end behaviour of the paginator and the host pipeline

use autopage::{
    join, paginate, segment, split_pages, AutoPager, Item, Outcome, PagingPolicy, PagingType,
    Paginator, Settings, SkipReason, DEFAULT_MARKER,
};

const ARTICLE: &str = "<p>It was a bright cold day in April.</p>\
<p>The clocks were striking thirteen.</p>\
<p>Winston Smith slipped quickly through the glass doors.</p>\
<p>The hallway smelt of boiled cabbage and old rag mats.</p>\
<p>At one end of it a coloured poster had been tacked to the wall.</p>\
Too large for indoor display.";

fn markers(text: &str) -> usize {
    text.matches(DEFAULT_MARKER).count()
}

#[test]
fn paginator_alone_is_not_idempotent() {
    let policy = PagingPolicy::by_count(3);
    let once = paginate(ARTICLE, &policy);
    let twice = paginate(&once, &policy);

    assert_eq!(markers(&once), 2);
    assert!(markers(&twice) > markers(&once));
}

#[test]
fn host_pipeline_is_idempotent() {
    let pager = AutoPager::new(Settings {
        num_pages: 3,
        ..Default::default()
    });

    let mut item = Item::new(7, "post", ARTICLE);
    assert_eq!(pager.process(&mut item), Outcome::Paginated { pages: 3 });
    let first = item.content.clone();

    assert_eq!(
        pager.process(&mut item),
        Outcome::Skipped(SkipReason::AlreadyMarked)
    );
    assert_eq!(item.content, first);
}

#[test]
fn join_after_segment_uses_uniform_separator() {
    let joined = join(&segment(ARTICLE));
    let texts: Vec<_> = joined.split("\r\n\r\n").collect();
    assert_eq!(texts.len(), 6);
    assert_eq!(texts[0], "It was a bright cold day in April.");
    assert_eq!(texts[5], "Too large for indoor display.");
    assert!(!joined.contains("<p>"));
}

#[test]
fn word_paging_through_host() {
    let pager = AutoPager::new(Settings {
        paging_type: PagingType::Words,
        num_words: 15,
        ..Default::default()
    });
    let mut item = Item::new(1, "post", ARTICLE);

    // Word counts: 8, 5, 8, 10, 14, 5
    // Running: 8, 13, 21 (break), 10, 24 (break), 5
    assert_eq!(pager.process(&mut item), Outcome::Paginated { pages: 3 });

    let pages = split_pages(&item.content);
    assert_eq!(pages.len(), 3);
    assert!(pages[0].contains("Winston Smith"));
    assert!(pages[2].contains("Too large"));
}

#[test]
fn pages_are_contiguous_and_ordered() {
    let paginator = Paginator::new();
    let out = paginator.paginate(ARTICLE, &PagingPolicy::by_count(10));

    // More pages than blocks: every block but the last ends a page
    let pages = paginator.split_pages(&out);
    assert_eq!(pages.len(), 6);

    let rebuilt = pages.join("");
    assert_eq!(rebuilt, join(&segment(ARTICLE)));
}

#[test]
fn settings_from_json_drive_the_pipeline() {
    let settings = Settings::from_json(
        r#"{
            "post_types": ["post", "story"],
            "paging_type": "pages",
            "num_pages": 2,
            "marker": "<!--more-->"
        }"#,
    )
    .unwrap();
    let pager = AutoPager::new(settings);

    let mut story = Item::new(3, "story", ARTICLE);
    assert!(pager.process(&mut story).is_paginated());
    assert!(story.content.contains("<!--more-->"));
    assert!(!story.content.contains(DEFAULT_MARKER));

    let mut page = Item::new(4, "page", ARTICLE);
    assert_eq!(
        pager.process(&mut page),
        Outcome::Skipped(SkipReason::UnsupportedKind)
    );
}
