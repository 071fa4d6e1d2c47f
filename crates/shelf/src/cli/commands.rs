//! # CLI Layer
//!
//! The only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments become typed commands via clap
//! 2. **Session Setup**: configuration is loaded, flags override it, and a
//!    [`ShelfApi`] session is built
//! 3. **Dispatch**: each command calls one API operation
//! 4. **Output**: results go through `render` (text or `--json`)

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use shelfapp::api::{ShelfApi, SourceEdit, TagEdit};
use shelfapp::config::ShelfConfig;
use shelfapp::model::{NewSource, NewTag};
use shelfapp::routes::Params;
use shelfapp::store::Subscription;
use tracing::debug;

use super::logging;
use super::render;
use super::setup::{Cli, Commands, LabelCommands, SourceCommands, TagCommands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = session_config(&cli)?;
    debug!(?config, "effective configuration");
    let api = ShelfApi::new(config);

    // kept alive for the whole dispatch
    let _watch = if cli.watch { watch(&api) } else { Vec::new() };

    let out = Output { json: cli.json };
    match cli.command {
        None => list_sources(&api, out),
        Some(Commands::Labels { action }) => {
            labels(&api, out, action.unwrap_or(LabelCommands::List))
        }
        Some(Commands::Tags { action }) => tags(&api, out, action.unwrap_or(TagCommands::List)),
        Some(Commands::Sources { action }) => {
            sources(&api, out, action.unwrap_or(SourceCommands::List))
        }
    }
}

/// Config file and environment first, then command-line flags on top.
fn session_config(cli: &Cli) -> Result<ShelfConfig> {
    let mut config = ShelfConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(count) = cli.count {
        config.sample_count = count;
    }
    if cli.empty {
        config.samples = false;
    }
    Ok(config)
}

fn watch(api: &ShelfApi) -> Vec<Subscription> {
    vec![
        api.labels()
            .subscribe(|s| eprintln!("{}", render::watch_line("labels", s.len()))),
        api.tags()
            .subscribe(|s| eprintln!("{}", render::watch_line("tags", s.len()))),
        api.sources()
            .subscribe(|s| eprintln!("{}", render::watch_line("sources", s.len()))),
    ]
}

#[derive(Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn emit<T>(self, value: &T, text: impl FnOnce() -> String) -> Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        if self.json {
            println!("{}", render::json(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    fn removed(self, what: &str, id: &str, removed: bool) -> Result<()> {
        if self.json {
            println!("{}", render::json(&json!({ "removed": removed }))?);
        } else if removed {
            println!("{}", render::success(&format!("Removed {} {}", what, id)));
        } else {
            println!("{}", render::warning(&format!("No {} with id {}", what, id)));
        }
        Ok(())
    }

    fn missing(self, what: &str, id: &str) -> Result<()> {
        if self.json {
            println!("{}", render::json(&json!(null))?);
        } else {
            println!("{}", render::warning(&format!("No {} with id {}", what, id)));
        }
        Ok(())
    }
}

fn id_params(id: String) -> Params {
    Params::from([("id".to_string(), id)])
}

fn labels(api: &ShelfApi, out: Output, action: LabelCommands) -> Result<()> {
    match action {
        LabelCommands::List => {
            let labels = api.list_labels();
            out.emit(&*labels, || render::labels(&labels))
        }
        LabelCommands::Add { name } => {
            let label = api.add_label(name);
            out.emit(&label, || render::success(&format!("Added label {}", label.name)))
        }
        LabelCommands::Remove { name } => {
            let removed = api.remove_label(&name);
            out.removed("label", &name, removed)
        }
    }
}

fn tags(api: &ShelfApi, out: Output, action: TagCommands) -> Result<()> {
    match action {
        TagCommands::List => {
            let tags = api.list_tags();
            out.emit(&*tags, || render::tags(&tags))
        }
        TagCommands::Add { name } => {
            let tag = api.add_tag(NewTag::new(name));
            out.emit(&tag, || {
                render::success(&format!("Added tag {} ({})", tag.name, tag.id))
            })
        }
        TagCommands::Show { id } => {
            let page = api.load_tag(&id_params(id))?;
            out.emit(&page, || render::tag_detail(&page.tag))
        }
        TagCommands::Edit { id, name, color } => {
            match api.edit_tag(&id, TagEdit { name, color })? {
                Some(tag) => out.emit(&tag, || render::tag_detail(&tag)),
                None => out.missing("tag", &id),
            }
        }
        TagCommands::Remove { id } => {
            let removed = api.remove_tag(&id)?;
            out.removed("tag", &id, removed)
        }
    }
}

fn list_sources(api: &ShelfApi, out: Output) -> Result<()> {
    let sources = api.list_sources();
    out.emit(&*sources, || render::sources(&sources))
}

fn sources(api: &ShelfApi, out: Output, action: SourceCommands) -> Result<()> {
    match action {
        SourceCommands::List => list_sources(api, out),
        SourceCommands::Add { name } => {
            let source = api.add_source(NewSource::new(name));
            out.emit(&source, || {
                render::success(&format!("Added source {} ({})", source.name, source.id))
            })
        }
        SourceCommands::Show { id } => {
            let page = api.load_source(&id_params(id))?;
            out.emit(&page, || render::source_detail(&page.source))
        }
        SourceCommands::Edit {
            id,
            name,
            fragments,
            pages,
            tags,
        } => {
            let edit = SourceEdit {
                name,
                n_fragments: fragments,
                n_pages: pages,
                tags: (!tags.is_empty()).then_some(tags),
            };
            match api.edit_source(&id, edit)? {
                Some(source) => out.emit(&source, || render::source_detail(&source)),
                None => out.missing("source", &id),
            }
        }
        SourceCommands::Remove { id } => {
            let removed = api.remove_source(&id)?;
            out.removed("source", &id, removed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn no_file() -> Option<std::path::PathBuf> {
        Some(std::env::temp_dir().join("shelf-cli-tests-missing.toml"))
    }

    #[test]
    fn test_flags_override_config() {
        let mut cli = parse(&["shelf", "--seed", "9", "--count", "2", "--empty"]);
        cli.config = no_file();
        let config = session_config(&cli).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.sample_count, 2);
        assert!(!config.samples);
    }

    #[test]
    fn test_id_params_uses_id_key() {
        let params = id_params("abc".to_string());
        assert_eq!(params.get("id").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_watch_holds_one_subscription_per_store() {
        let api = ShelfApi::new(ShelfConfig {
            seed: Some(3),
            ..Default::default()
        });
        let subs = watch(&api);
        assert_eq!(subs.len(), 3);
        assert_eq!(api.sources().subscriber_count(), 1);
        drop(subs);
        assert_eq!(api.sources().subscriber_count(), 0);
    }
}
