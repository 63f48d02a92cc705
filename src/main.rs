use clap::Parser;
use taskcmd::cli::{
    run_add, run_delete, run_edit, run_filter, run_list, run_menu, run_toggle, run_warnings, Cli,
    Commands,
};
use taskcmd::config::init_logging;
use taskcmd::{Config, TaskStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = Config::resolve(cli.file);
    let store = TaskStore::open(&config);
    tracing::debug!(path = %store.path().display(), "using task file");

    let Some(command) = cli.command else {
        // No subcommand provided - show interactive menu
        return run_menu(&store);
    };

    let mut tasks = store.load();
    match command {
        Commands::List => run_list(&tasks),
        Commands::Add(args) => run_add(&store, &mut tasks, args.into())?,
        Commands::Edit(args) => {
            let edit = args.edit();
            run_edit(&store, &mut tasks, Some(args.number), edit)?;
        }
        Commands::Delete(args) => run_delete(&store, &mut tasks, Some(args.number))?,
        Commands::Toggle(args) => run_toggle(&store, &mut tasks, Some(args.number))?,
        Commands::Filter(args) => run_filter(&tasks, args.subject)?,
        Commands::Warnings => run_warnings(&tasks),
    }

    Ok(())
}
