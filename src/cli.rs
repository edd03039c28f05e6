use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::Route;
use crate::config::{SiteConfig, DEFAULT_BIND, DEFAULT_PUBLIC_DIR};
use crate::export::build_site;
use crate::server;

#[derive(Debug, Parser)]
#[command(name = "dara", version, about = "DARA dataset catalog site")]
pub struct Cli {
    #[command(flatten)]
    pub site: SiteArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct SiteArgs {
    /// Address the HTTP server binds to
    #[arg(long, env = "DARA_BIND", default_value = DEFAULT_BIND, global = true)]
    pub bind: SocketAddr,

    /// JSON catalog to serve instead of the built-in one
    #[arg(long, env = "DARA_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Host page containing the #root mount container
    #[arg(long, env = "DARA_HOST_PAGE", global = true)]
    pub host_page: Option<PathBuf>,

    /// Directory served under /public
    #[arg(long, env = "DARA_PUBLIC_DIR", default_value = DEFAULT_PUBLIC_DIR, global = true)]
    pub public_dir: PathBuf,
}

impl From<SiteArgs> for SiteConfig {
    fn from(args: SiteArgs) -> Self {
        Self {
            bind: args.bind,
            catalog: args.catalog,
            host_page: args.host_page,
            public_dir: args.public_dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the site over HTTP
    Serve,
    /// Render every page to static HTML
    Build { out_dir: PathBuf },
    /// Print one rendered page, e.g. `render /datasets/2`
    Render { path: String },
    /// Print the dataset catalog
    List {
        /// Tab-separated table instead of JSON
        #[arg(long)]
        table: bool,
    },
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };
    let config = SiteConfig::from(cli.site);

    match cli.command {
        Command::Serve => handle_serve(&config),
        Command::Build { out_dir } => handle_build(&config, out_dir),
        Command::Render { path } => handle_render(&config, &path),
        Command::List { table } => handle_list(&config, table),
    }
}

fn handle_serve(config: &SiteConfig) -> i32 {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return 1;
        }
    };
    match runtime.block_on(server::run_server(config)) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_build(config: &SiteConfig, out_dir: PathBuf) -> i32 {
    let app = match config.build_app() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("build failed: {err}");
            return 1;
        }
    };
    match build_site(&app, &config.public_dir, &out_dir) {
        Ok(report) => {
            println!(
                "build complete: pages={}, assets={}, out='{}'",
                report.pages,
                report.assets,
                out_dir.display()
            );
            0
        }
        Err(err) => {
            eprintln!("build failed: {err}");
            1
        }
    }
}

fn handle_render(config: &SiteConfig, path: &str) -> i32 {
    let rendered = config
        .build_app()
        .and_then(|app| app.render(&Route::parse(path)));
    match rendered {
        Ok(page) => {
            println!("{}", page.html);
            if page.status.is_success() {
                0
            } else {
                eprintln!("{path}: {}", page.status);
                1
            }
        }
        Err(err) => {
            eprintln!("render failed: {err}");
            1
        }
    }
}

fn handle_list(config: &SiteConfig, as_table: bool) -> i32 {
    let store = match config.load_store() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to load catalog: {err}");
            return 1;
        }
    };

    if as_table {
        println!("id\tname\trecords\tupdated\ttags");
        for record in store.all() {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                record.id,
                record.name,
                record.records,
                record.updated,
                record.tags.join(",")
            );
        }
        return 0;
    }

    match store.to_json_pretty() {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize catalog: {err}");
            1
        }
    }
}
