// image-feed-core-client/image-feed-cli
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::fmt::{Display, Formatter};
use std::iter::once;

use anyhow::Result;
use common::{demo_dir, enable_debug_logging, load_credentials, Level};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use image_feed_core_client::dtos::{AuthorizationCode, PageLoadOutcome, Photo, Url};
use image_feed_core_client::infra::auth::FsTokenStore;
use image_feed_core_client::{Client, ClientDelegate, ClientEvent, FeedChange};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

fn configure_client() -> Result<Client> {
    let token_path = demo_dir().join("token.json");
    println!("The access token is stored at {:?}", token_path);

    let client = Client::builder()
        .set_credentials(load_credentials())
        .set_token_store(FsTokenStore::open(&token_path)?)
        .set_delegate(Some(Box::new(Delegate {})))
        .build();

    Ok(client)
}

fn select_command() -> Selection {
    let options: Vec<Selection> = Selection::iter().collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to do?")
        .default(0)
        .items(&options[..])
        .interact()
        .ok();

    let Some(selection) = selection else {
        return Selection::Noop;
    };

    println!();
    options[selection].clone()
}

fn prompt_string(prompt: impl Into<String>) -> String {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(false)
        .interact_text()
        .unwrap()
}

fn select_photo(client: &Client) -> Option<Photo> {
    let photos = client.feed.photos();
    if photos.is_empty() {
        println!("The feed is empty. Load a page first.");
        return None;
    }

    let items = photos
        .iter()
        .map(|photo| PhotoRow(photo).to_string())
        .collect::<Vec<_>>();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a photo")
        .default(0)
        .items(&items[..])
        .interact()
        .ok()?;

    photos.into_iter().nth(selection)
}

async fn login(client: &Client) -> Result<()> {
    println!(
        "Open the following URL in your browser and grant access:\n{}\n",
        client.auth.authorization_url()?
    );

    let input = prompt_string("Paste the URL you were redirected to (or just the code)");

    // Anything that doesn't parse as the redirect URL is taken as the bare code.
    let code = match Url::parse(&input) {
        Ok(url) => client.auth.authorization_code(&url),
        Err(_) => Some(AuthorizationCode::from(input.trim())),
    };

    let Some(code) = code else {
        println!("The URL does not contain an authorization code.");
        return Ok(());
    };

    client.auth.login_with_code(&code).await?;
    println!("Logged in.");
    Ok(())
}

async fn load_next_page(client: &Client) -> Result<()> {
    match client.feed.load_next_page().await {
        PageLoadOutcome::Ignored => println!("A page is being loaded already."),
        PageLoadOutcome::Merged { page, appended } => {
            println!("Loaded page {page}. {appended} new photos.")
        }
        PageLoadOutcome::RetryScheduled { page } => println!(
            "Loading page {page} failed. Retrying in {:?}…",
            client.config().page_retry_delay
        ),
        PageLoadOutcome::Failed { error, .. } if error.is_auth_required() => {
            println!("You need to log in first.")
        }
        PageLoadOutcome::Failed { page, error } => println!("Failed to load page {page}. {error}"),
        PageLoadOutcome::Discarded { page } => println!("Page {page} was discarded."),
    }
    Ok(())
}

fn list_photos(client: &Client) {
    let photos = client
        .feed
        .photos()
        .iter()
        .map(|photo| PhotoRow(photo).to_string())
        .collect::<Vec<_>>();

    println!(
        "{} photos (last page: {}):\n{}",
        photos.len(),
        client
            .feed
            .last_loaded_page()
            .map(|page| page.to_string())
            .unwrap_or("-".to_string()),
        photos.join("\n")
    );
}

async fn toggle_like(client: &Client) -> Result<()> {
    let Some(photo) = select_photo(client) else {
        return Ok(());
    };

    let is_liked = client.feed.toggle_like(&photo.id).await?;
    println!(
        "{} photo {}.",
        if is_liked { "Liked" } else { "Unliked" },
        photo.id
    );
    Ok(())
}

async fn show_profile(client: &Client) -> Result<()> {
    let profile = match client.profile.profile() {
        Some(profile) => profile,
        None => client.profile.load_profile().await?,
    };

    println!(
        "{}\n{}\n{}\nAvatar: {}",
        profile.name,
        profile.login_name,
        profile.bio.as_deref().unwrap_or("<no bio>"),
        client.profile.avatar_url().as_deref().unwrap_or("<none>")
    );
    Ok(())
}

struct PhotoRow<'a>(&'a Photo);

impl Display for PhotoRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let photo = self.0;
        write!(
            f,
            "{} {:<12} | {:>5}x{:<5} | {}",
            if photo.is_liked { "♥" } else { " " },
            photo.id.as_str().truncate_to(12),
            photo.size.width,
            photo.size.height,
            photo
                .description
                .as_deref()
                .unwrap_or("<no description>")
                .truncate_to(50)
        )
    }
}

trait StrExt {
    fn truncate_to(&self, new_len: usize) -> String;
}

impl StrExt for str {
    fn truncate_to(&self, new_len: usize) -> String {
        let count = self.chars().count();

        if count <= new_len {
            return self.to_string();
        }

        self.chars().take(new_len - 1).chain(once('…')).collect()
    }
}

struct Delegate {}

impl ClientDelegate for Delegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        match event {
            ClientEvent::FeedChanged {
                change: FeedChange::Appended { photos },
            } => println!("[event] {} photos appended.", photos.len()),
            ClientEvent::FeedChanged {
                change: FeedChange::PhotoUpdated { id },
            } => println!("[event] Photo {id} updated."),
            ClientEvent::FeedChanged {
                change: FeedChange::Reset,
            } => println!("[event] Feed reset."),
            ClientEvent::FeedLoadFailed { page, error } => {
                println!("[event] Page {page} could not be loaded. {error}")
            }
            ClientEvent::ProfileChanged => println!("[event] Profile loaded."),
            ClientEvent::AvatarChanged { url } => println!("[event] Avatar at {url}."),
            ClientEvent::AuthStatusChanged { is_authenticated } => {
                println!("[event] Authenticated: {is_authenticated}.")
            }
        }
    }
}

#[derive(EnumIter, Display, Clone)]
enum Selection {
    #[strum(serialize = "Log in")]
    Login,
    #[strum(serialize = "Load next page")]
    LoadNextPage,
    #[strum(serialize = "List photos")]
    ListPhotos,
    #[strum(serialize = "Like/unlike photo")]
    ToggleLike,
    #[strum(serialize = "Show profile")]
    ShowProfile,
    #[strum(serialize = "Reset feed")]
    ResetFeed,
    #[strum(serialize = "Log out")]
    Logout,
    #[strum(serialize = "Noop")]
    Noop,
    #[strum(serialize = "Exit")]
    Exit,
}

#[tokio::main]
async fn main() -> Result<()> {
    env::set_var("RUST_BACKTRACE", "1");
    enable_debug_logging(Level::TRACE);

    let client = configure_client()?;

    if client.is_authenticated() {
        println!("Using the stored access token.");
    }

    loop {
        println!();

        let result = match select_command() {
            Selection::Login => login(&client).await,
            Selection::LoadNextPage => load_next_page(&client).await,
            Selection::ListPhotos => {
                list_photos(&client);
                Ok(())
            }
            Selection::ToggleLike => toggle_like(&client).await,
            Selection::ShowProfile => show_profile(&client).await,
            Selection::ResetFeed => {
                client.feed.reset();
                Ok(())
            }
            Selection::Logout => client.auth.logout(),
            Selection::Noop => Ok(()),
            Selection::Exit => break,
        };

        if let Err(err) = result {
            println!("{err:#}");
        }
    }

    Ok(())
}
