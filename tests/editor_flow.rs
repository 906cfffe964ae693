//! Post editor flow: async create-then-navigate with injected collaborators.

use std::sync::Arc;

use chrono::DateTime;
use formbench::prelude::*;

struct EditorSetup {
    harness: FormHarness<PostEditor>,
    api: Arc<RecordingPostApi>,
    nav: Arc<RecordingNavigator>,
}

fn mounted_editor(api: RecordingPostApi) -> EditorSetup {
    let api = Arc::new(api);
    let nav = Arc::new(RecordingNavigator::new());
    let editor = PostEditor::new(
        Author::new("foo bar"),
        Arc::clone(&api) as Arc<dyn PostApi>,
        Arc::clone(&nav) as Arc<dyn Navigator>,
    );
    EditorSetup {
        harness: FormHarness::mount(editor),
        api,
        nav,
    }
}

async fn fill_editor(harness: &FormHarness<PostEditor>) {
    harness
        .fill(&[
            ("Title", "I like twix"),
            ("Content", "A lot of things"),
            ("Tags", "twix,   my,likes"),
        ])
        .await
        .unwrap();
}

#[tokio::test]
async fn submission_creates_post_then_navigates_home() {
    let mut setup = mounted_editor(RecordingPostApi::new());
    fill_editor(&setup.harness).await;

    setup.harness.dispatch_submit();
    // The create call settles on a later scheduler turn; assertions are only
    // valid after a microtask flush.
    setup.harness.flush().await;

    let created = setup.api.spy().single_call();
    assert!(
        DateTime::parse_from_rfc3339(&created.date).is_ok(),
        "date must be an RFC 3339 string: {:?}",
        created.date
    );
    setup.api.spy().assert_called_once_with(&NewPost {
        author_id: "foo bar".to_string(),
        title: "I like twix".to_string(),
        content: "A lot of things".to_string(),
        tags: vec!["twix".to_string(), "my".to_string(), "likes".to_string()],
        date: created.date.clone(),
    });
    setup.nav.spy().assert_called_once_with(&"/".to_string());
    assert!(setup.harness.submit_outcome().await.unwrap().is_ok());
}

#[tokio::test]
async fn click_submit_takes_the_same_async_path() {
    let mut setup = mounted_editor(RecordingPostApi::new());
    fill_editor(&setup.harness).await;

    setup.harness.click_submit().await.unwrap();
    setup.harness.flush().await;

    setup.api.spy().assert_call_count(1);
    setup.nav.spy().assert_called_once_with(&"/".to_string());
}

#[tokio::test]
async fn empty_tags_field_creates_post_with_no_tags() {
    let mut setup = mounted_editor(RecordingPostApi::new());
    setup
        .harness
        .fill(&[("Title", "untitled"), ("Content", ""), ("Tags", " , , ")])
        .await
        .unwrap();

    setup.harness.dispatch_submit();
    setup.harness.flush().await;

    let created = setup.api.spy().single_call();
    assert!(created.tags.is_empty(), "blank tags must be discarded: {:?}", created.tags);
    let _ = setup.harness.submit_outcome().await;
}

#[tokio::test]
async fn rejected_create_surfaces_error_and_skips_navigation() {
    let mut setup = mounted_editor(RecordingPostApi::rejecting("service unavailable"));
    fill_editor(&setup.harness).await;

    setup.harness.dispatch_submit();
    setup.harness.flush().await;

    let outcome = setup.harness.submit_outcome().await.unwrap();
    let err = outcome.unwrap_err();
    assert_eq!(err.code(), "FB-3001");
    assert!(err.to_string().contains("service unavailable"), "{err}");

    setup.api.spy().assert_call_count(1);
    setup.nav.spy().assert_call_count(0);
}

#[tokio::test]
async fn form_accepts_a_retry_after_rejection() {
    let mut setup = mounted_editor(RecordingPostApi::rejecting("flaky"));
    fill_editor(&setup.harness).await;

    setup.harness.dispatch_submit();
    setup.harness.flush().await;
    assert!(setup.harness.submit_outcome().await.unwrap().is_err());

    setup.api.accept();
    setup.harness.dispatch_submit();
    setup.harness.flush().await;

    assert!(setup.harness.submit_outcome().await.unwrap().is_ok());
    setup.api.spy().assert_call_count(2);
    setup.nav.spy().assert_called_once_with(&"/".to_string());
}

#[tokio::test]
async fn double_dispatch_in_flight_creates_exactly_one_post() {
    let mut setup = mounted_editor(RecordingPostApi::new());
    fill_editor(&setup.harness).await;

    setup.harness.dispatch_submit();
    setup.harness.dispatch_submit();
    setup.harness.flush().await;

    setup.api.spy().assert_call_count(1);
    setup.nav.spy().assert_call_count(1);

    let first = setup.harness.submit_outcome().await.unwrap();
    let second = setup.harness.submit_outcome().await.unwrap();
    assert!(first.is_ok());
    assert_eq!(second.unwrap_err().code(), "FB-2003");
}
