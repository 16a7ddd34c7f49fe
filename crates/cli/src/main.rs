use clap::{Parser, Subcommand};
use scamwatch_core::catalog::preview;
use scamwatch_core::config::{collection_from_env_value, content_source_from_env_values};
use scamwatch_core::{
    CatalogEntity, CatalogKind, CatalogResult, CatalogService, CatalogView, ContentSource,
    CoreConfig, LoadPhase, ScamRecord, TacticRecord,
};
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scamwatch")]
#[command(about = "Browse the Scamwatch scam and dark pattern catalogs")]
struct Cli {
    /// Read collections from this fixture directory
    #[arg(long, global = true, conflicts_with = "cms_url")]
    fixtures: Option<PathBuf>,
    /// Read collections from this hosted CMS
    #[arg(long, global = true)]
    cms_url: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog items matching the filters
    List {
        /// Catalog: scams or dark-patterns
        #[arg(value_parser = parse_catalog)]
        catalog: CatalogKind,
        /// Free-text query
        #[arg(long, short)]
        query: Option<String>,
        /// Exact category (default: all)
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Show one item in detail
    Show {
        /// Catalog: scams or dark-patterns
        #[arg(value_parser = parse_catalog)]
        catalog: CatalogKind,
        /// Item identifier
        id: String,
    },
    /// List the categories present in a catalog
    Categories {
        /// Catalog: scams or dark-patterns
        #[arg(value_parser = parse_catalog)]
        catalog: CatalogKind,
    },
}

fn parse_catalog(value: &str) -> Result<CatalogKind, String> {
    CatalogKind::from_slug(value).ok_or_else(|| {
        let known: Vec<&str> = CatalogKind::ALL.iter().map(|k| k.slug()).collect();
        format!("unknown catalog {value:?}, expected one of {}", known.join(", "))
    })
}

/// Resolve configuration: command-line source flags win over the environment.
fn resolve_config(fixtures: Option<PathBuf>, cms_url: Option<String>) -> CatalogResult<CoreConfig> {
    let var = |name: &str| std::env::var(name).ok();
    let source = match (fixtures, cms_url) {
        (Some(dir), _) => ContentSource::Fixtures { dir },
        (None, Some(url)) => content_source_from_env_values(
            Some(url),
            var("CMS_API_KEY"),
            None,
            var("CMS_TIMEOUT_SECS"),
        )?,
        (None, None) => return CoreConfig::from_env(),
    };
    CoreConfig::new(
        source,
        collection_from_env_value(var("CMS_SCAMS_COLLECTION"), CatalogKind::Scams)?,
        collection_from_env_value(var("CMS_TACTICS_COLLECTION"), CatalogKind::DarkPatterns)?,
    )
}

fn render_list<T: CatalogEntity>(view: &CatalogView<T>) -> String {
    let mut out = String::new();
    if view.phase() == LoadPhase::Failed {
        let _ = writeln!(out, "Could not load {}.", T::KIND.nav_label());
    }
    let visible = view.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "{}.", T::KIND.empty_message());
        return out;
    }
    for item in visible {
        let _ = writeln!(
            out,
            "{}  {} [{}]",
            item.id(),
            item.name().unwrap_or("(untitled)"),
            item.category().unwrap_or("uncategorised")
        );
        let summary = preview(item.primary_description());
        if !summary.is_empty() {
            let _ = writeln!(out, "    {summary}");
        }
    }
    out
}

fn render_detail<T: CatalogEntity>(item: &T) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.name().unwrap_or("(untitled)"));
    let _ = writeln!(out, "ID: {}", item.id());
    if let Some(category) = item.category().filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "Category: {category}");
    }
    for (heading, text) in item.detail_sections() {
        let _ = writeln!(out, "\n{heading}:\n{text}");
    }
    if let Some(src) = item.visual_example_ref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "\nVisual example: {src}");
    }
    out
}

fn render_categories<T: CatalogEntity>(view: &CatalogView<T>) -> String {
    let mut out = String::new();
    for category in view.category_options() {
        let _ = writeln!(out, "{category}");
    }
    out
}

async fn run_list<T: CatalogEntity>(
    service: &CatalogService,
    query: Option<String>,
    category: Option<String>,
) -> String {
    let mut view = service.visit::<T>().await;
    if let Some(query) = query {
        view.set_query(query);
    }
    if let Some(category) = category {
        view.set_category(&category);
    }
    render_list(&view)
}

async fn run_show<T: CatalogEntity>(service: &CatalogService, id: &str) -> String {
    let mut view = service.visit::<T>().await;
    view.select_by_id(Some(id));
    match view.selection() {
        Some(item) => render_detail(item),
        None => format!("No such item: {id}\n\n{}", render_list(&view)),
    }
}

async fn run_categories<T: CatalogEntity>(service: &CatalogService) -> String {
    render_categories(&service.visit::<T>().await)
}

async fn run(service: &CatalogService, command: Commands) -> String {
    match command {
        Commands::List {
            catalog,
            query,
            category,
        } => match catalog {
            CatalogKind::Scams => run_list::<ScamRecord>(service, query, category).await,
            CatalogKind::DarkPatterns => run_list::<TacticRecord>(service, query, category).await,
        },
        Commands::Show { catalog, id } => match catalog {
            CatalogKind::Scams => run_show::<ScamRecord>(service, &id).await,
            CatalogKind::DarkPatterns => run_show::<TacticRecord>(service, &id).await,
        },
        Commands::Categories { catalog } => match catalog {
            CatalogKind::Scams => run_categories::<ScamRecord>(service).await,
            CatalogKind::DarkPatterns => run_categories::<TacticRecord>(service).await,
        },
    }
}

/// `RUST_LOG` plus warnings from the catalog and CMS decoding layers.
fn env_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("scamwatch_core=warn".parse()?)
        .add_directive("cms=warn".parse()?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'scamwatch --help' for commands");
        return Ok(());
    };

    let cfg = resolve_config(cli.fixtures, cli.cms_url)?;
    let service = CatalogService::from_config(Arc::new(cfg))?;
    print!("{}", run(&service, command).await);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use scamwatch_core::repository::MemoryContentRepository;
    use serde_json::json;

    fn service(repo: MemoryContentRepository) -> CatalogService {
        let cfg = CoreConfig::with_source(ContentSource::Fixtures {
            dir: PathBuf::from("unused"),
        })
        .expect("default collections are valid");
        CatalogService::new(Arc::new(cfg), Arc::new(repo))
    }

    fn repo() -> MemoryContentRepository {
        MemoryContentRepository::new()
            .with_collection(
                "scamtypes",
                vec![
                    json!({"_id": "1", "scamName": "Phishing", "description": "Fake emails", "category": "Email"}),
                    json!({"_id": "2", "scamName": "Romance Scam", "description": "Fake relationship", "category": "Social"}),
                ],
            )
            .with_collection(
                "deceptivetactics",
                vec![json!({
                    "_id": "t1",
                    "tacticName": "Roach Motel",
                    "shortDescription": "Easy in, hard out",
                    "detailedExplanation": "Cancelling takes a phone call.",
                    "category": "Obstruction"
                })],
            )
    }

    #[test]
    fn default_filter_includes_cms_warnings() {
        let filter = env_filter().expect("directives parse").to_string().to_lowercase();
        assert!(filter.contains("cms=warn"), "{filter}");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_catalog_slugs() {
        let cli = Cli::try_parse_from(["scamwatch", "list", "dark-patterns", "-q", "motel"])
            .expect("valid arguments");
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                catalog: CatalogKind::DarkPatterns,
                ..
            })
        ));
        assert!(Cli::try_parse_from(["scamwatch", "list", "tactics"]).is_err());
        assert!(Cli::try_parse_from([
            "scamwatch",
            "--fixtures",
            "content",
            "--cms-url",
            "https://cms.example.com",
            "categories",
            "scams"
        ])
        .is_err());
    }

    #[test]
    fn fixtures_flag_selects_fixture_source() {
        let cfg = resolve_config(Some(PathBuf::from("content")), None).unwrap();
        assert_eq!(
            cfg.content_source(),
            &ContentSource::Fixtures {
                dir: PathBuf::from("content")
            }
        );
        assert!(resolve_config(None, Some("not a url".into())).is_err());
    }

    #[tokio::test]
    async fn list_applies_filters() {
        let out = run(
            &service(repo()),
            Commands::List {
                catalog: CatalogKind::Scams,
                query: Some("fake".into()),
                category: Some("Email".into()),
            },
        )
        .await;
        assert!(out.contains("1  Phishing [Email]"));
        assert!(!out.contains("Romance"));
    }

    #[tokio::test]
    async fn show_prints_detail_or_falls_back_to_list() {
        let svc = service(repo());
        let out = run(
            &svc,
            Commands::Show {
                catalog: CatalogKind::DarkPatterns,
                id: "t1".into(),
            },
        )
        .await;
        assert!(out.starts_with("Roach Motel\n"));
        assert!(out.contains("Detailed Explanation:\nCancelling takes a phone call."));

        let out = run(
            &svc,
            Commands::Show {
                catalog: CatalogKind::Scams,
                id: "9".into(),
            },
        )
        .await;
        assert!(out.starts_with("No such item: 9"));
        assert!(out.contains("Romance Scam"));
    }

    #[tokio::test]
    async fn categories_and_failed_loads() {
        let out = run(
            &service(repo()),
            Commands::Categories {
                catalog: CatalogKind::Scams,
            },
        )
        .await;
        assert_eq!(out, "Email\nSocial\n");

        let out = run(
            &service(repo().failing("scamtypes")),
            Commands::List {
                catalog: CatalogKind::Scams,
                query: None,
                category: None,
            },
        )
        .await;
        assert!(out.contains("Could not load Scam Types."));
        assert!(out.contains("No scams found."));
    }
}
