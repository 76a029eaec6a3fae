//! accordion-inspect - upgrade the accordions of an HTML page and replay
//! interactions against them
//!
//! ```text
//! accordion-inspect <file.html|-> [--focus ID] [--click ID] [--press CODE]... [--json]
//! ```
//!
//! `--focus` and `--click` take an item id and target its trigger. Actions
//! run in order. The result is printed as the upgraded `<body>` markup, or
//! as a JSON snapshot with `--json`.

use std::io::Read;

use anyhow::{bail, Context, Result};
use fos_accordion::AccordionHost;
use fos_dom::serialize;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: accordion-inspect <file.html|-> [--focus ID] [--click ID] [--press CODE]... [--json]";

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Focus(String),
    Click(String),
    Press(String),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: String,
    actions: Vec<Action>,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut input = None;
    let mut actions = Vec::new();
    let mut json = false;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().with_context(|| format!("{flag} needs a value\n{USAGE}"));
        match arg.as_str() {
            "--focus" => actions.push(Action::Focus(value("--focus")?)),
            "--click" => actions.push(Action::Click(value("--click")?)),
            "--press" => actions.push(Action::Press(value("--press")?)),
            "--json" => json = true,
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ if input.is_some() => bail!("only one input file is accepted\n{USAGE}"),
            other => input = Some(other.to_string()),
        }
    }

    Ok(Args {
        input: input.context(USAGE)?,
        actions,
        json,
    })
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html).context("failed to read stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}

fn trigger_of(host: &AccordionHost, id: &str) -> Result<fos_dom::NodeId> {
    match host.item(id) {
        Some(item) => Ok(item.trigger()),
        None => bail!("no accordion item with id {id:?}"),
    }
}

fn apply(host: &mut AccordionHost, action: &Action) -> Result<()> {
    match action {
        Action::Focus(id) => {
            let trigger = trigger_of(host, id)?;
            host.focus(trigger)?;
        }
        Action::Click(id) => {
            let trigger = trigger_of(host, id)?;
            host.click(trigger)?;
        }
        Action::Press(code) => {
            if host.press_key(code)?.is_none() {
                tracing::warn!("Nothing focused, ignoring --press {}", code);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let html = read_input(&args.input)?;
    let mut host = AccordionHost::from_html(&html).context("failed to upgrade accordions")?;
    tracing::info!("Loaded {} accordion(s) from {}", host.accordions().len(), args.input);

    for action in &args.actions {
        apply(&mut host, action)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&host.snapshot())?);
    } else {
        let document = host.document();
        println!("{}", serialize::inner_html(document.tree(), document.body()));
    }
    Ok(())
}
