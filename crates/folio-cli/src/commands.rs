use anyhow::{Context, Result};
use tracing::{Span, instrument, warn};

use folio_cli::input::{parse_assignment, read_json};
use folio_client::{HttpPersistence, Persistence};
use folio_model::{BlogDraft, Profile, Project, ProjectDraft};
use folio_studio::{
    BlogEditor, CommitOutcome, Editor, InMemoryStore, ProfileEditSession, ProjectEditor,
    StudioSettings, SubmitOutcome, Submittable,
};
use folio_validate::{ValidationResult, validate};

use crate::cli::{
    Cli, DraftKindArg, ProfileArgs, ProjectsArgs, PublishArgs, PublishKindArg, ValidateArgs,
};

/// Load settings and apply command-line overrides.
pub fn load_settings(cli: &Cli) -> Result<StudioSettings> {
    let mut settings = match &cli.settings {
        Some(path) => StudioSettings::load_from(path),
        None => StudioSettings::load(),
    }
    .context("load settings")?;
    if let Some(url) = &cli.api_url {
        settings.api.base_url.clone_from(url);
    }
    Ok(settings)
}

pub fn connect(settings: &StudioSettings) -> Result<HttpPersistence> {
    HttpPersistence::new(&settings.api).context("create API client")
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationResult> {
    let result = match args.kind {
        DraftKindArg::Blog => validate(&read_json::<BlogDraft>(&args.file)?),
        DraftKindArg::Project => validate(&read_json::<ProjectDraft>(&args.file)?),
        DraftKindArg::Profile => validate(&read_json::<folio_model::ProfileDraft>(&args.file)?),
    };
    Ok(result)
}

#[instrument(skip_all, fields(owner = %args.owner))]
pub async fn run_publish(
    args: &PublishArgs,
    persistence: &dyn Persistence,
) -> Result<SubmitOutcome> {
    let mut store = InMemoryStore::new();
    match args.kind {
        PublishKindArg::Blog => {
            let draft: BlogDraft = read_json(&args.file)?;
            publish(BlogEditor::new(&args.owner), draft, persistence, &mut store).await
        }
        PublishKindArg::Project => {
            let draft: ProjectDraft = read_json(&args.file)?;
            publish(ProjectEditor::new(&args.owner), draft, persistence, &mut store).await
        }
    }
}

/// Walk an editor through its steps and submit on the last one.
async fn publish<D: Submittable>(
    mut editor: Editor<D>,
    draft: D,
    persistence: &dyn Persistence,
    store: &mut InMemoryStore,
) -> Result<SubmitOutcome> {
    editor.open_with(draft);
    while editor.next_step() {}
    editor
        .submit(persistence, store)
        .await
        .context("submit draft")
}

#[instrument(skip_all, fields(owner = tracing::field::Empty))]
pub async fn run_profile(
    args: &ProfileArgs,
    persistence: &dyn Persistence,
) -> Result<CommitOutcome> {
    let mut profile: Profile = read_json(&args.file)?;
    if let Some(owner) = &args.owner {
        profile.id.clone_from(owner);
    }
    Span::current().record("owner", profile.id.as_str());

    let mut store = InMemoryStore::with_user(profile.clone());
    let mut session = ProfileEditSession::new(profile);
    session.start_editing();

    for raw in &args.set {
        let assignment = parse_assignment(raw)?;
        session
            .set_field_by_name(&assignment.field, assignment.value)
            .with_context(|| format!("set {}", assignment.field))?;
    }
    for tag in &args.remove_tag {
        session.remove_tag(tag);
    }
    for tag in &args.add_tag {
        if !session.add_tag(tag) {
            warn!(tag = %tag, "tag not added: blank, or the profile already has 6 tags");
        }
    }

    Ok(session.commit(persistence, &mut store).await)
}

#[instrument(skip_all, fields(owner = %args.owner))]
pub async fn run_projects(
    args: &ProjectsArgs,
    persistence: &dyn Persistence,
) -> Result<Vec<Project>> {
    persistence
        .fetch_projects(&args.owner)
        .await
        .with_context(|| format!("list projects of {}", args.owner))
}
