use checklist::cli::{FlagOps, run_flags};
use checklist::core::config::{self, EarlyLog, ResolvedConfig};
use checklist::core::error::Result;
use checklist::core::state::App;
use checklist::core::store::SqliteStore;
use checklist::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "checklist", about = "Personal checklist manager")]
struct Args {
    /// Add an item with this title
    #[arg(short = 'a', value_name = "TITLE")]
    add: Option<String>,

    /// Toggle completion of the item with this id
    #[arg(short = 'c', value_name = "ID")]
    check: Option<i64>,

    /// Remove the item with this id
    #[arg(short = 'r', value_name = "ID")]
    remove: Option<i64>,

    /// List items
    #[arg(short = 'l')]
    list: bool,

    /// Restrict adding and listing to this checklist
    #[arg(long, value_name = "ID")]
    checklist: Option<i64>,

    /// Create a checklist with this title
    #[arg(long, value_name = "TITLE")]
    new_checklist: Option<String>,

    /// List checklists
    #[arg(long)]
    checklists: bool,

    /// Database file (overrides config and CHECKLIST_DB)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Config file (default: ~/.checklist/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn flag_ops(&self) -> FlagOps {
        FlagOps {
            new_checklist: self.new_checklist.clone(),
            add: self.add.clone(),
            check: self.check,
            remove: self.remove,
            list: self.list,
            list_checklists: self.checklists,
            checklist: self.checklist,
        }
    }
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = config.log_file.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn run(args: &Args, config: &ResolvedConfig) -> Result<()> {
    let store = SqliteStore::open(&config.database_path).inspect_err(|e| {
        log::error!("Failed to open database {}: {e}", config.database_path.display());
    })?;

    let ops = args.flag_ops();
    if ops.is_empty() {
        let app = App::new(Box::new(store))?;
        tui::run(app)?;
    } else {
        run_flags(&store, &ops, config.show_ids, &mut std::io::stdout().lock())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut early = EarlyLog::default();
    let (file_config, config_error) = match config::load_config(args.config.as_deref(), &mut early) {
        Ok(c) => (c, None),
        Err(e) => (config::ChecklistConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&file_config, args.db.as_deref(), &mut early);
    init_logging(&resolved);
    early.replay();

    if let Some(e) = config_error {
        log::warn!("{e}, using defaults");
        eprintln!("checklist: {e}, using defaults");
    }
    log::info!("Checklist starting with database {}", resolved.database_path.display());

    match run(&args, &resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("checklist: {e}");
            ExitCode::FAILURE
        }
    }
}
