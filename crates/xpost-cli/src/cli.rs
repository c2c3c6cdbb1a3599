//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::post::PostArgs;

/// Authorize an application with OAuth2 and publish a post.
#[derive(Parser, Debug)]
#[command(name = "xpost")]
#[command(author, version = env!("XPOST_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authorize interactively, then publish one post
    Post(PostArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn post_defaults() {
        let cli = Cli::try_parse_from(["xpost", "post", "--client-id", "abc"]).unwrap();
        let Commands::Post(args) = cli.command;
        assert_eq!(args.client_id, "abc");
        assert_eq!(args.redirect_uri, "https://localhost");
        assert_eq!(args.scopes, ["tweet.read", "tweet.write", "users.read"]);
        assert_eq!(args.text, "hi");
        assert_eq!(args.token_url, xpost::config::TOKEN_URL);
        assert!(!args.json);
    }

    #[test]
    fn repeated_scope_replaces_defaults() {
        let cli = Cli::try_parse_from([
            "xpost",
            "-vv",
            "post",
            "--client-id",
            "abc",
            "--scope",
            "tweet.write",
            "--scope",
            "offline.access",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Post(args) = cli.command;
        assert_eq!(args.scopes, ["tweet.write", "offline.access"]);
    }
}
