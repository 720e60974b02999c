use rs_readability::extract;

fn words(prefix: &str, n: usize) -> String {
    (0..n).map(|i| format!("{prefix}{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn extract_removes_blacklisted_id_regardless_of_children() {
    let prose = words("nav", 30);
    let html = format!(
        r#"
        <div class="post">
            <p>BODY_MARKER</p>
            <div id="nav-primary">
                <p>NAV_MARKER {prose}</p>
                <p>{prose}</p>
            </div>
        </div>"#
    );

    let article = extract(&html).expect("non-empty input");

    assert!(article.text().contains("BODY_MARKER"));
    assert!(!article.text().contains("NAV_MARKER"));
}

#[test]
fn extract_removes_blacklisted_class_inside_candidate() {
    let html = r#"
        <div class="entry">
            <p>BODY_MARKER</p>
            <div class="tag-list"><p>TAGS_MARKER politics</p><p>economy</p></div>
        </div>"#;

    let article = extract(html).expect("non-empty input");

    assert!(article.text().contains("BODY_MARKER"));
    assert!(!article.text().contains("TAGS_MARKER"));
}

#[test]
fn extract_does_not_penalize_cleanup_only_keywords_when_scoring() {
    // "tag" is only blacklisted for divisions inside a candidate.
    let html = r#"<div class="entry-tags"><p>TAGGED_MARKER</p></div>"#;

    let article = extract(html).expect("non-empty input");

    assert!(article.is_parsed());
    assert!(article.text().contains("TAGGED_MARKER"));
}

#[test]
fn extract_removes_pure_text_divisions() {
    let html = r#"
        <div class="post">
            <p>BODY_MARKER</p>
            <div>TEXTDIV_MARKER loose text without structure</div>
        </div>"#;

    let article = extract(html).expect("non-empty input");

    assert!(article.text().contains("BODY_MARKER"));
    assert!(!article.text().contains("TEXTDIV_MARKER"));
}

#[test]
fn extract_keeps_long_division_without_counted_children() {
    let prose = words("s", 30);
    let html = format!(
        r#"
        <div class="post">
            <p>BODY_MARKER</p>
            <div><span>KEEP_MARKER {prose}</span></div>
        </div>"#
    );

    let article = extract(&html).expect("non-empty input");

    assert!(article.text().contains("KEEP_MARKER"));
}

#[test]
fn extract_removes_short_link_lists() {
    let html = r#"
        <div class="post">
            <p>BODY_MARKER</p>
            <div class="related"><a href="/1">LINK_ONE</a><a href="/2">LINK_TWO</a></div>
            <div class="gallery"><img src="a.png"><img src="b.png"><p>GALLERY_MARKER</p></div>
        </div>"#;

    let article = extract(html).expect("non-empty input");

    assert!(article.text().contains("BODY_MARKER"));
    assert!(!article.text().contains("LINK_ONE"));
    assert!(!article.text().contains("GALLERY_MARKER"));
}

#[test]
fn extract_keeps_short_prose_divisions() {
    let html = r#"
        <div class="post">
            <p>BODY_MARKER</p>
            <div class="lede"><p>LEDE_MARKER brief</p><p>intro</p></div>
        </div>"#;

    let article = extract(html).expect("non-empty input");

    assert!(article.text().contains("LEDE_MARKER"));
}

#[test]
fn extract_excludes_comment_sections() {
    let comment = words("c", 30);
    let html = format!(
        r#"
        <div class="post"><p>POST_MARKER body</p></div>
        <div class="comments"><p>COMMENT_MARKER {comment}</p></div>"#
    );

    let article = extract(&html).expect("non-empty input");

    assert!(article.text().contains("POST_MARKER"));
    assert!(!article.text().contains("COMMENT_MARKER"));
}
