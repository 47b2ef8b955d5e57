// ============================================================================
// TERMINAL CLIENT FOR THE JSONPLACEHOLDER POSTS API
// ============================================================================

// - Loads the first ten posts
// - Add, edit, view and delete posts from a prompt
// - Writes are acknowledged remotely and applied locally
// - Structured logging to stderr (RUST_LOG)

use std::io::{self, Write};

use postboard::{
    HttpPostsApi, PostForm, PostId, PostsController,
    config::Settings,
    view::{render_post, render_screen},
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  list           Show the posts
  view <id>      Show one post in full
  add            Create a post
  edit <id>      Edit a post
  delete <id>    Delete a post
  help           Show this help
  quit           Leave";

const DELETE_PROMPT: &str = "Are you sure you want to delete this post? [y/N] ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    List,
    View(PostId),
    Add,
    Edit(PostId),
    Delete(PostId),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let mut id = || {
        words
            .next()
            .ok_or_else(|| format!("usage: {name} <id>"))?
            .parse::<PostId>()
            .map_err(|_| "post ids are positive numbers".to_string())
    };

    match name {
        "list" | "ls" => Ok(Command::List),
        "view" => Ok(Command::View(id()?)),
        "add" => Ok(Command::Add),
        "edit" => Ok(Command::Edit(id()?)),
        "delete" | "rm" => Ok(Command::Delete(id()?)),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    /// Prints `label` and reads one line. `None` once stdin is closed.
    async fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        print!("{label}");
        io::stdout().flush()?;
        self.lines.next_line().await
    }

    /// Reads the form fields; empty input keeps the pre-filled value.
    async fn form(&mut self, current: PostForm) -> io::Result<Option<PostForm>> {
        let Some(title) = self.ask(&format!("Title [{}]: ", current.title)).await? else {
            return Ok(None);
        };
        let Some(body) = self.ask(&format!("Content [{}]: ", current.body)).await? else {
            return Ok(None);
        };

        let keep_or = |input: String, old: String| if input.trim().is_empty() { old } else { input };
        Ok(Some(PostForm::new(
            keep_or(title, current.title),
            keep_or(body, current.body),
        )))
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let settings = Settings::load();
    info!("Using posts API at {}", settings.api_base_url);

    let mut controller = PostsController::new(HttpPostsApi::new(settings.api_base_url));
    let mut prompt = Prompt {
        lines: BufReader::new(tokio::io::stdin()).lines(),
    };

    println!("JSONPlaceholder CRUD App");
    print!("{}", render_screen(&controller));
    controller.load().await;
    print!("{}", render_screen(&controller));

    loop {
        let Some(line) = prompt.ask("> ").await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match command {
            Command::List => {}
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::View(id) => {
                match controller.find(id) {
                    Some(post) => print!("{}", render_post(post)),
                    None => println!("No post with id {id}."),
                }
                continue;
            }
            Command::Add => {
                println!("Add New Post");
                let Some(form) = prompt.form(PostForm::default()).await? else {
                    break;
                };
                if let Err(err) = controller.create(form).await {
                    println!("{err}");
                    continue;
                }
            }
            Command::Edit(id) => {
                let Some(current) = controller.find(id).map(PostForm::from_post) else {
                    println!("No post with id {id}.");
                    continue;
                };
                println!("Edit Post");
                let Some(form) = prompt.form(current).await? else {
                    break;
                };
                if let Err(err) = controller.update(id, form).await {
                    println!("{err}");
                    continue;
                }
            }
            Command::Delete(id) => {
                let Some(answer) = prompt.ask(DELETE_PROMPT).await? else {
                    break;
                };
                controller.delete(id, || is_yes(&answer)).await;
            }
        }

        print!("{}", render_screen(&controller));
    }

    Ok(())
}
