use super::*;

#[test]
fn find_known_story_returns_its_title() {
    let story = find_story("kala-utsav-2024").unwrap();
    assert_eq!(story.title, "Kala Utsav 2024");
    assert_eq!(story.category, "Events");
}

#[test]
fn find_unknown_story_is_not_found() {
    let err = find_story("missing-story").unwrap_err();
    assert_eq!(err, DashboardError::StoryNotFound("missing-story".to_owned()));
}

#[test]
fn lookup_is_exact_match() {
    assert!(find_story("Kala-Utsav-2024").is_err());
    assert!(find_story("").is_err());
}

#[test]
fn catalogue_ids_are_unique_and_resolvable() {
    let stories = all_stories();
    assert_eq!(stories.len(), 3);
    for story in stories {
        assert_eq!(find_story(story.id).unwrap().id, story.id);
    }
}

#[test]
fn story_bodies_render_section_headings() {
    let html = crate::util::markdown::render_html(find_story("digital-art-revolution").unwrap().body);
    assert!(html.contains("<h2>Accessibility and Reach</h2>"));
}

#[test]
fn story_href_uses_story_route() {
    assert_eq!(story_href("kala-utsav-2024"), "/story/kala-utsav-2024");
}
