use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, ChildStdout, Command, ExitStatus, Output, Stdio};

use url::Url;
use wiremock::MockServer;

/// Environment variables the CLI reads; cleared so the host cannot leak in.
const CLI_ENV: &[&str] = &[
    "XPOST_CLIENT_ID",
    "XPOST_CLIENT_SECRET",
    "XPOST_REDIRECT_URI",
    "RUST_LOG",
];

/// Endpoint overrides pointing the CLI at a mock server.
pub fn endpoint_args(server: &MockServer) -> Vec<String> {
    let base = format!("http://127.0.0.1:{}", server.address().port());
    vec![
        "--authorize-url".to_string(),
        format!("{base}/i/oauth2/authorize"),
        "--token-url".to_string(),
        format!("{base}/2/oauth2/token"),
        "--api-url".to_string(),
        base,
    ]
}

fn command(args: &[String]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xpost"));
    cmd.args(args);
    for var in CLI_ENV {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run the CLI to completion with empty stdin.
pub fn run_cli(args: &[String]) -> Output {
    command(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute CLI")
}

/// Result of an interactive session.
pub struct Session {
    pub status: ExitStatus,
    pub authorization_url: Url,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn the CLI, wait for the authorization URL, then answer the prompt
/// with whatever `answer` builds from that URL (`None` closes stdin).
pub fn run_interactive<F>(args: &[String], answer: F) -> Session
where
    F: FnOnce(&Url) -> Option<String>,
{
    let mut child: Child = command(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let (authorization_url, mut seen) = read_authorization_url(&mut stdout);

    let mut stdin = child.stdin.take().unwrap();
    if let Some(line) = answer(&authorization_url) {
        writeln!(stdin, "{line}").unwrap();
    }
    drop(stdin);

    stdout.read_to_string(&mut seen).unwrap();

    let mut stderr = String::new();
    child
        .stderr
        .take()
        .unwrap()
        .read_to_string(&mut stderr)
        .unwrap();

    let status = child.wait().unwrap();

    Session {
        status,
        authorization_url,
        stdout: seen,
        stderr,
    }
}

/// Read stdout lines until the authorization URL shows up.
fn read_authorization_url(stdout: &mut BufReader<ChildStdout>) -> (Url, String) {
    let mut seen = String::new();
    loop {
        let mut line = String::new();
        let read = stdout.read_line(&mut line).unwrap();
        if read == 0 {
            panic!("CLI exited before printing an authorization URL:\n{seen}");
        }
        seen.push_str(&line);
        if let Ok(url) = Url::parse(line.trim())
            && url.scheme().starts_with("http")
        {
            return (url, seen);
        }
    }
}

/// Look up a query parameter.
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

/// The redirect the platform would issue after approval.
pub fn approve(url: &Url, code: &str) -> String {
    let state = query_param(url, "state").expect("authorization URL has no state");
    format!("https://localhost/?state={state}&code={code}")
}
