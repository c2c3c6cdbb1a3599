//! Post command implementation.
//!
//! Prints an authorization URL, reads back the redirect URL the user landed
//! on, exchanges it for an access token and publishes one post.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;

use xpost::config::{API_URL, AUTHORIZE_URL, TOKEN_URL};
use xpost::{
    ApiClient, ClientCredentials, Endpoints, Error, OAuth2UserHandler, PostText, Scopes,
};

use crate::output;

#[derive(Args, Debug)]
pub struct PostArgs {
    /// OAuth2 client id from the developer portal
    #[arg(long, env = "XPOST_CLIENT_ID")]
    pub client_id: String,

    /// OAuth2 client secret (omit for a public client)
    #[arg(long, env = "XPOST_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Redirect URI registered for the application
    #[arg(long, env = "XPOST_REDIRECT_URI", default_value = "https://localhost")]
    pub redirect_uri: String,

    /// Scope to request; repeat for several
    #[arg(
        long = "scope",
        value_name = "SCOPE",
        default_values = ["tweet.read", "tweet.write", "users.read"]
    )]
    pub scopes: Vec<String>,

    /// Text of the post
    #[arg(long, default_value = "hi")]
    pub text: String,

    /// Authorization endpoint
    #[arg(long, default_value = AUTHORIZE_URL)]
    pub authorize_url: String,

    /// Token endpoint
    #[arg(long, default_value = TOKEN_URL)]
    pub token_url: String,

    /// API base URL
    #[arg(long, default_value = API_URL)]
    pub api_url: String,

    /// Print the created post as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: PostArgs) -> Result<()> {
    // Validate everything before sending the user to the browser.
    let endpoints = Endpoints::new(&args.authorize_url, &args.token_url, &args.api_url)
        .context("Invalid endpoint URL")?;
    let credentials =
        ClientCredentials::new(&args.client_id, args.client_secret.as_deref(), &args.redirect_uri)
            .context("Invalid client configuration")?;
    let scopes = Scopes::new(&args.scopes).context("Invalid scope")?;
    let text = PostText::new(&args.text).context("Invalid post text")?;

    let handler = OAuth2UserHandler::new(credentials, scopes, endpoints.clone())
        .context("Failed to create HTTP client")?;

    debug!(
        client_id = handler.credentials().client_id(),
        confidential = handler.credentials().is_confidential(),
        scopes = %handler.scopes(),
        "Starting authorization"
    );

    let pending = handler.authorization_url();

    println!("Please visit this URL to authorize the application:");
    println!("{}", pending.url());
    println!();

    let redirect_url = read_redirect_url(&mut io::stdin().lock(), &mut io::stdout().lock())?;

    output::progress("Fetching access token...");
    let tokens = handler
        .fetch_token(pending, &redirect_url)
        .await
        .inspect_err(|e| {
            if let Error::Protocol(err) = e
                && err.is_auth_error()
            {
                output::error("The token endpoint rejected the request; check the client id and secret");
            }
        })
        .context("Failed to fetch access token")?;

    let client = ApiClient::new(&endpoints, tokens.into_access_token())
        .context("Failed to create HTTP client")?;

    output::progress("Posting...");
    let post = client
        .create_post(&text)
        .await
        .context("Failed to create post")?;

    if args.json {
        output::json(&post)?;
    } else {
        output::success("Post created successfully");
        output::field("ID", &post.id);
        output::field("Text", &post.text);
        output::field("URL", &post.url());
    }

    Ok(())
}

/// Prompt for the redirect URL and read one line.
fn read_redirect_url<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "Enter the full callback URL you were redirected to: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    let url = line.trim();
    if read == 0 || url.is_empty() {
        bail!("No redirect URL entered");
    }

    Ok(url.to_string())
}
