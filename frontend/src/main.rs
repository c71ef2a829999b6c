//! Command-line entry-point: drives the group and post workflows against a
//! live backend.

use std::ffi::OsString;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use serde::Serialize;
use tracing::info;

use community_frontend::config::ClientSettings;
use community_frontend::domain::ports::GroupApi;
use community_frontend::domain::{
    DislikeId, Discussion, FieldErrors, GroupCreateForm, GroupEditForm, GroupFormPorts, GroupId,
    PostFeed, PostId, PostReactions, SessionStore, SubmitOutcome, Topic,
};
use community_frontend::outbound::navigation::TracingNavigator;
use community_frontend::outbound::rest::RestApiClient;
use community_frontend::telemetry::init_tracing;

/// Manage community groups and posts.
#[derive(Debug, Parser)]
#[command(name = "community", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a group and join the given topics.
    CreateGroup(CreateGroupArgs),
    /// Edit an existing group.
    EditGroup(EditGroupArgs),
    /// Publish a post in a group.
    Post(PostArgs),
    /// List the dislikes recorded for a post.
    Dislikes {
        /// Post identifier.
        post: i64,
    },
    /// Dislike a post.
    Dislike {
        /// Post identifier.
        post: i64,
    },
    /// Remove a dislike.
    Undislike {
        /// Dislike identifier.
        dislike: i64,
    },
}

#[derive(Debug, Args)]
struct CreateGroupArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    rules: Option<String>,
    #[arg(long)]
    avatar: Option<String>,
    /// Topic label or id; repeat to select several.
    #[arg(long = "topic")]
    topics: Vec<Topic>,
}

#[derive(Debug, Args)]
struct EditGroupArgs {
    /// Group identifier.
    id: i64,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    rules: Option<String>,
    #[arg(long)]
    avatar: Option<String>,
    /// Replaces the current topic selection when given.
    #[arg(long = "topic")]
    topics: Vec<Topic>,
}

#[derive(Debug, Args)]
struct PostArgs {
    /// Group identifier.
    group: i64,
    #[arg(long)]
    body: String,
    #[arg(long)]
    photo: Option<String>,
}

type RestPorts = GroupFormPorts<RestApiClient, RestApiClient, TracingNavigator>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let settings = ClientSettings::load_from_iter([OsString::from("community")])
        .map_err(|e| eyre!("failed to load client settings: {e}"))?;
    init_tracing(settings.log_json);

    let client = Arc::new(build_client(&settings)?);
    let session = SessionStore::new();

    match cli.command {
        Command::CreateGroup(args) => create_group(ports(&client, &session), args).await,
        Command::EditGroup(args) => edit_group(ports(&client, &session), args).await,
        Command::Post(args) => post(client, args).await,
        Command::Dislikes { post } => {
            let dislikes = PostReactions::new(client).dislikes(PostId::new(post)).await?;
            print_json(&dislikes)
        }
        Command::Dislike { post } => {
            let dislike = PostReactions::new(client).dislike(PostId::new(post)).await?;
            print_json(&dislike)
        }
        Command::Undislike { dislike } => {
            PostReactions::new(client)
                .undo_dislike(DislikeId::new(dislike))
                .await?;
            Ok(())
        }
    }
}

fn build_client(settings: &ClientSettings) -> Result<RestApiClient> {
    let base_url = settings
        .api_base_url()
        .wrap_err("invalid api base url")?;
    let client = RestApiClient::new(base_url, settings.request_timeout())
        .wrap_err("failed to build http client")?;
    Ok(match settings.auth_token() {
        Some(token) => client.with_auth_token(token),
        None => client,
    })
}

fn ports(client: &Arc<RestApiClient>, session: &SessionStore) -> RestPorts {
    GroupFormPorts {
        groups: Arc::clone(client),
        users: Arc::clone(client),
        navigator: Arc::new(TracingNavigator),
        session: session.clone(),
    }
}

async fn create_group(ports: RestPorts, args: CreateGroupArgs) -> Result<()> {
    let mut form = GroupCreateForm::new(ports);
    form.set_title(args.title);
    form.set_description(args.description);
    if let Some(rules) = args.rules {
        form.set_rules(rules);
    }
    if let Some(avatar) = args.avatar {
        form.set_avatar(avatar);
    }
    for topic in args.topics {
        if !form.draft().topics.contains(topic) {
            form.toggle_topic(topic);
        }
    }
    report(form.submit().await)
}

async fn edit_group(ports: RestPorts, args: EditGroupArgs) -> Result<()> {
    let original = ports
        .groups
        .fetch_group(GroupId::new(args.id))
        .await?;
    let mut form = GroupEditForm::new(ports, original);
    if let Some(title) = args.title {
        form.set_title(title);
    }
    if let Some(description) = args.description {
        form.set_description(description);
    }
    if let Some(rules) = args.rules {
        form.set_rules(rules);
    }
    if let Some(avatar) = args.avatar {
        form.set_avatar(avatar);
    }
    if !args.topics.is_empty() {
        let current: Vec<Topic> = form.draft().topics.iter().collect();
        for topic in current {
            form.toggle_topic(topic);
        }
        for topic in args.topics {
            if !form.draft().topics.contains(topic) {
                form.toggle_topic(topic);
            }
        }
    }
    report(form.submit().await)
}

async fn post(client: Arc<RestApiClient>, args: PostArgs) -> Result<()> {
    let group_id = GroupId::new(args.group);
    let group = client.fetch_group(group_id).await?;
    let mut discussion = Discussion::new(client, group_id, PostFeed::new());
    discussion.mount(&[group]);

    let mut composer = discussion.composer();
    composer.set_body(args.body);
    if let Some(photo) = args.photo {
        composer.set_photo(photo);
    }
    let outcome = composer.submit().await;
    info!(
        group_id = %composer.group_id(),
        posts = discussion.posts().len(),
        "feed updated"
    );
    report(outcome)
}

fn report<T: Serialize>(outcome: SubmitOutcome<T>) -> Result<()> {
    match outcome {
        SubmitOutcome::Succeeded(value) => print_json(&value),
        SubmitOutcome::Rejected(errors) => Err(eyre!(describe(&errors))),
        SubmitOutcome::Failed(err) => Err(eyre!(
            "{} failed after {} completed calls: {}",
            err.step,
            err.completed_calls,
            err.source.message()
        )),
        SubmitOutcome::Ignored => Err(eyre!("nothing to submit")),
    }
}

fn describe(errors: &FieldErrors) -> String {
    let fields = errors
        .iter()
        .map(|(field, error)| format!("{field:?}: {error}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("validation failed ({fields})")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
