//! End-to-end editor scenarios against a recording persistence double.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_client::{ClientError, Persistence};
use folio_model::{
    BlogField, BlogPost, Entity, Payload, Profile, ProfileField, Project, ProjectField,
};
use folio_studio::{
    BeginSubmit, BlogEditor, CommitOutcome, IgnoreReason, InMemoryStore, NotificationKind,
    ProfileEditSession, ProjectEditor, ScrollGeometry, ScrollRegion, SpaceView, Step,
    SubmitOutcome,
};

/// Echoes payloads back as canonical entities and records every call.
#[derive(Default)]
struct RecordingPersistence {
    calls: AtomicUsize,
    payloads: Mutex<Vec<Payload>>,
    fail_with: Option<ClientError>,
    projects: Vec<Project>,
}

impl RecordingPersistence {
    fn failing(error: ClientError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, payload: &Payload) -> folio_client::Result<usize> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.payloads.lock().unwrap().push(payload.clone());
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(call),
        }
    }
}

fn echo(payload: &Payload, owner_id: &str, id: String) -> Entity {
    match payload {
        Payload::Blog(body) => Entity::BlogPost(BlogPost {
            id,
            owner_id: owner_id.to_string(),
            title: body.title.clone(),
            description: body.description.clone(),
            image: body.image.clone(),
            tags: body.tags.clone(),
            text: body.text.clone(),
            created_at: None,
        }),
        Payload::Project(body) => Entity::Project(Project {
            id: body.id.clone().unwrap_or(id),
            owner_id: owner_id.to_string(),
            title: body.title.clone(),
            description: body.description.clone(),
            image: body.image.clone(),
            tags: body.tags.clone(),
            github: body.github.clone(),
            url: body.url.clone(),
            created_at: None,
        }),
        Payload::Profile(body) => Entity::Profile(Profile {
            id: owner_id.to_string(),
            name: "Ada".to_string(),
            title: body.title.clone(),
            company: body.company.clone(),
            email: body.email.clone(),
            summary: body.summary.clone(),
            github: body.github.clone(),
            linkedin: body.linkedin.clone(),
            tags: body.tags.clone(),
            ..Default::default()
        }),
    }
}

#[async_trait]
impl Persistence for RecordingPersistence {
    async fn create_entity(
        &self,
        payload: &Payload,
        owner_id: &str,
    ) -> folio_client::Result<Entity> {
        let call = self.record(payload)?;
        Ok(echo(payload, owner_id, format!("created-{call}")))
    }

    async fn update_entity(
        &self,
        payload: &Payload,
        owner_id: &str,
    ) -> folio_client::Result<Entity> {
        let call = self.record(payload)?;
        Ok(echo(payload, owner_id, format!("updated-{call}")))
    }

    async fn fetch_projects(&self, _owner_id: &str) -> folio_client::Result<Vec<Project>> {
        Ok(self.projects.clone())
    }
}

fn filled_blog_editor() -> BlogEditor {
    let mut editor = BlogEditor::new("u1");
    editor.open();
    editor.set_field(BlogField::Title, "Post");
    editor.set_field(BlogField::Description, "Desc");
    editor.set_field(BlogField::Tags, "a,b,c");
    editor.set_field(BlogField::Text, "Body");
    editor
}

fn ada() -> Profile {
    Profile {
        id: "u1".to_string(),
        name: "Ada".to_string(),
        tags: vec!["x".to_string(), "y".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_invalid_title_never_reaches_persistence() {
    let persistence = RecordingPersistence::default();
    let mut store = InMemoryStore::new();
    let mut editor = filled_blog_editor();
    editor.set_field(BlogField::Title, "");
    editor.press_step_button();

    let outcome = editor.submit(&persistence, &mut store).await.unwrap();

    let SubmitOutcome::Invalid(result) = outcome else {
        panic!("expected validation failure, got {outcome:?}");
    };
    assert_eq!(result.invalid_fields().collect::<Vec<_>>(), vec!["title"]);
    assert!(editor.is_invalid(BlogField::Title));
    assert_eq!(
        editor.helper_text(BlogField::Title).as_deref(),
        Some("Required.")
    );
    assert_eq!(persistence.calls(), 0);
    assert!(store.blog_posts().is_empty());
}

#[tokio::test]
async fn test_blog_submit_commits_with_split_tags() {
    let persistence = RecordingPersistence::default();
    let mut store = InMemoryStore::new();
    let mut editor = filled_blog_editor();

    assert_eq!(editor.step_button().map(|button| button.label), Some("Next"));
    editor.press_step_button();
    assert_eq!(editor.step(), Step::Content);
    assert_eq!(editor.step_button().map(|button| button.label), Some("Previous"));

    let outcome = editor.submit(&persistence, &mut store).await.unwrap();

    let SubmitOutcome::Committed { entity, notification } = outcome else {
        panic!("expected commit, got {outcome:?}");
    };
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(entity.id(), "created-1");

    let payloads = persistence.payloads.lock().unwrap();
    let Payload::Blog(body) = &payloads[0] else {
        panic!("expected a blog payload");
    };
    assert_eq!(body.tags, vec!["a", "b", "c"]);

    assert_eq!(store.blog_posts().len(), 1);
    assert_eq!(store.blog_posts()[0].tags, vec!["a", "b", "c"]);
    assert!(!editor.is_open());
    assert_eq!(editor.draft(), &Default::default());
    assert_eq!(editor.step(), Step::General);
}

#[tokio::test]
async fn test_rapid_double_submit_persists_once() {
    let persistence = RecordingPersistence::default();
    let mut store = InMemoryStore::new();
    let mut editor = filled_blog_editor();
    editor.next_step();

    let BeginSubmit::Pending(first) = editor.begin_submit().unwrap() else {
        panic!("expected a pending submission");
    };
    let second = editor.submit(&persistence, &mut store).await.unwrap();
    assert_eq!(second, SubmitOutcome::Ignored(IgnoreReason::InFlight));

    let response = persistence.save(&first.payload, editor.owner_id()).await;
    let outcome = editor.complete(first.ticket, response, &mut store);

    assert!(matches!(outcome, SubmitOutcome::Committed { .. }));
    assert_eq!(persistence.calls(), 1);
    assert_eq!(store.blog_posts().len(), 1);
}

#[tokio::test]
async fn test_failed_submit_keeps_draft_for_retry() {
    let persistence = RecordingPersistence::failing(ClientError::Server {
        status: 503,
        message: "maintenance".to_string(),
    });
    let mut store = InMemoryStore::new();
    let mut editor = filled_blog_editor();
    editor.next_step();

    let outcome = editor.submit(&persistence, &mut store).await.unwrap();
    let SubmitOutcome::Failed { error, notification } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(error.is_retryable());
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(editor.draft().title, "Post");
    assert!(editor.is_open());

    let retry = editor.submit(&persistence, &mut store).await.unwrap();
    assert!(matches!(retry, SubmitOutcome::Failed { .. }));
    assert_eq!(persistence.calls(), 2);
}

#[tokio::test]
async fn test_project_edit_replaces_in_store() {
    let persistence = RecordingPersistence {
        projects: vec![Project {
            id: "p1".to_string(),
            owner_id: "u1".to_string(),
            title: "Folio".to_string(),
            description: "Showcase".to_string(),
            image: String::new(),
            tags: vec!["rust".to_string()],
            github: String::new(),
            url: String::new(),
            created_at: None,
        }],
        ..Default::default()
    };
    let mut store = InMemoryStore::new();
    let region = ScrollRegion::new();
    let mut view = SpaceView::mount(&region, ada(), false);

    assert_eq!(view.load_projects(&persistence, &mut store).await.unwrap(), 1);
    let existing = store.projects()[0].clone();

    view.edit_project(&existing);
    let editor: &mut ProjectEditor = view.project_editor_mut().unwrap();
    assert_eq!(editor.draft().tags, "rust");
    editor.set_field(ProjectField::Title, "Folio Studio");

    let outcome = editor.submit(&persistence, &mut store).await.unwrap();
    let SubmitOutcome::Committed { notification, .. } = outcome else {
        panic!("expected commit, got {outcome:?}");
    };
    assert_eq!(notification.message, "Project Updated");
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.projects()[0].title, "Folio Studio");
}

#[tokio::test]
async fn test_profile_tag_session() {
    let persistence = RecordingPersistence::default();
    let mut store = InMemoryStore::with_user(ada());
    let mut session = ProfileEditSession::new(ada());

    session.start_editing();
    assert!(session.add_tag("z"));
    assert_eq!(session.remove_tag("x"), 1);
    session.set_field(ProfileField::Summary, "Builds things");

    let outcome = session.commit(&persistence, &mut store).await;

    let CommitOutcome::Committed { profile, notification } = outcome else {
        panic!("expected commit, got {outcome:?}");
    };
    assert_eq!(notification.message, "Profile Updated");
    assert_eq!(profile.tags, vec!["y", "z"]);
    assert_eq!(
        store.current_user().map(|user| user.tags.as_slice()),
        Some(["y".to_string(), "z".to_string()].as_slice())
    );
    assert!(!session.is_editing());
    assert_eq!(session.displayed_tags(), ["y", "z"]);
}

#[test]
fn test_cancelled_tag_session_leaves_profile_untouched() {
    let mut session = ProfileEditSession::new(ada());
    session.start_editing();

    session.add_tag("z");
    assert_eq!(session.displayed_tags(), ["x", "y", "z"]);
    session.remove_tag("x");
    assert_eq!(session.displayed_tags(), ["y", "z"]);

    session.cancel();
    assert_eq!(session.committed().tags, vec!["x", "y"]);
    assert_eq!(session.displayed_tags(), ["x", "y"]);
}

#[tokio::test]
async fn test_seventh_tag_is_ignored() {
    let mut session = ProfileEditSession::new(Profile::default());
    session.start_editing();
    for tag in ["a", "b", "c", "d", "e", "f"] {
        assert!(session.add_tag(tag));
    }
    assert!(!session.add_tag("g"));
    assert_eq!(session.displayed_tags().len(), 6);

    let persistence = RecordingPersistence::default();
    let mut store = InMemoryStore::new();
    let outcome = session.commit(&persistence, &mut store).await;
    assert!(matches!(outcome, CommitOutcome::Committed { .. }));
}

#[test]
fn test_space_card_darkens_while_mounted() {
    let region = ScrollRegion::new();
    let view = SpaceView::mount(&region, ada(), true);
    region.dispatch(ScrollGeometry {
        reference_bottom: 400.0,
        boundary_top: 100.0,
    });
    insta::assert_debug_snapshot!(view.card_style(), @r"
    Shadowed {
        alpha: 0.75,
    }
    ");

    drop(view);
    assert_eq!(region.listener_count(), 0);
}
