use rs_readability::Readability;

fn words(prefix: &str, n: usize) -> String {
    (0..n).map(|i| format!("{prefix}{i}")).collect::<Vec<_>>().join(" ")
}

fn long_paragraphs(marker: &str, count: usize) -> String {
    (0..count)
        .map(|i| format!("<p>{marker}_{i} {}</p>", words("w", 25)))
        .collect()
}

#[test]
fn strong_block_drops_everything_below_absolute_threshold() {
    let strong = long_paragraphs("STRONG", 12);
    let medium: String = (0..15).map(|i| format!("<p>MEDIUM_{i}</p>")).collect();
    let html = format!(
        r#"
        <div class="post">{strong}</div>
        <div class="text">{medium}</div>
        <div class="entry"><p>WEAK_MARKER</p></div>"#
    );

    let mut session = Readability::from_html(&html).expect("non-empty input");
    let article = session.parse();

    // post: +1 keyword and +1 length per paragraph
    assert_eq!(session.highest_score(), 24);
    assert_eq!(article.candidate_count(), 1);
    assert!(article.text().contains("STRONG_0"));
    assert!(!article.text().contains("MEDIUM_0"));
    assert!(!article.text().contains("WEAK_MARKER"));
}

#[test]
fn weak_page_keeps_only_best_scoring_blocks() {
    let html = r#"
        <div class="post-content"><p>BEST_MARKER</p></div>
        <div class="post"><p>RUNNER_UP_MARKER</p></div>"#;

    let mut session = Readability::from_html(html).expect("non-empty input");
    let article = session.parse();

    assert_eq!(session.highest_score(), 2);
    assert!(article.text().contains("BEST_MARKER"));
    assert!(!article.text().contains("RUNNER_UP_MARKER"));
}

#[test]
fn class_and_id_matches_add_up() {
    let html = r#"
        <div class="post" id="story"><p>BOTH_MARKER</p></div>
        <div class="post"><p>CLASS_ONLY_MARKER</p></div>"#;

    let mut session = Readability::from_html(html).expect("non-empty input");
    let article = session.parse();

    assert_eq!(session.highest_score(), 2);
    assert!(article.text().contains("BOTH_MARKER"));
    assert!(!article.text().contains("CLASS_ONLY_MARKER"));
}

#[test]
fn semi_good_keyword_alone_does_not_qualify() {
    let html = r#"<div class="main"><p>MAIN_MARKER</p></div>"#;

    let mut session = Readability::from_html(html).expect("non-empty input");
    let article = session.parse();

    assert!(!article.is_parsed());
    assert_eq!(session.highest_score(), 0);
}

#[test]
fn semi_good_keyword_boosts_plausible_block() {
    let html = r#"
        <div class="main-article"><p>BOOSTED_MARKER</p></div>
        <div class="article"><p>PLAIN_MARKER</p></div>"#;

    let mut session = Readability::from_html(html).expect("non-empty input");
    let article = session.parse();

    assert_eq!(session.highest_score(), 2);
    assert!(article.text().contains("BOOSTED_MARKER"));
    assert!(!article.text().contains("PLAIN_MARKER"));
}

#[test]
fn unclassed_parent_needs_a_long_paragraph() {
    let long = words("x", 21);
    let html = format!(
        r#"
        <div><p>SHORT_MARKER</p></div>
        <div><p>LONG_MARKER {long}</p></div>"#
    );

    let article = Readability::from_html(&html).expect("non-empty input").parse();

    assert!(article.text().contains("LONG_MARKER"));
    assert!(!article.text().contains("SHORT_MARKER"));
}

#[test]
fn penalized_block_never_becomes_candidate() {
    let long = long_paragraphs("FOOTER", 5);
    let html = format!(r#"<div id="footer">{long}</div>"#);

    let mut session = Readability::from_html(&html).expect("non-empty input");
    let article = session.parse();

    assert!(!article.is_parsed());
    assert_eq!(session.highest_score(), -1);
}

#[test]
fn semi_good_keyword_counts_once_earlier_paragraphs_scored() {
    let long = words("x", 21);
    let html = format!(r#"<div class="main"><p>GATED_MARKER {long}</p><p>short</p></div>"#);

    let mut session = Readability::from_html(&html).expect("non-empty input");
    let article = session.parse();

    // first visit: gated, +1 length; second visit: +1 main
    assert_eq!(session.highest_score(), 2);
    assert!(article.text().contains("GATED_MARKER"));
}
