use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use datagrid::logging::init_logging;
use datagrid::{AppConfig, ConfigManager, FilterOperator, GridDocument, GridOptions, GridView};
use datagrid_cli::{Args, FilterArg, OutputFormat};

fn apply_filter_arg(view: &mut GridView, arg: &FilterArg) -> Result<()> {
    let operator: FilterOperator = arg.operator.parse().map_err(|e: String| eyre!(e))?;
    let data_type = view
        .column(&arg.column)
        .map(|h| h.data_type)
        .ok_or_else(|| eyre!("Unknown column in --filter: {}", arg.column))?;
    view.apply_filter(&arg.column, &arg.value, operator, data_type)?;
    Ok(())
}

/// Replay the command-line actions against the view, in the order a user
/// would perform them.
fn apply_args(view: &mut GridView, args: &Args) -> Result<()> {
    for column in &args.sort {
        view.toggle_sort(column)?;
    }
    for filter in &args.filter {
        apply_filter_arg(view, filter)?;
    }
    for column in &args.clear_filter {
        view.clear_filter(column)?;
    }
    if let Some(query) = &args.search {
        view.set_search_query(query)?;
    }
    if let Some(page_size) = args.page_size {
        view.set_page_size(page_size)?;
    }
    if let Some(page) = args.page {
        view.go_to_page(page)?;
    }
    Ok(())
}

fn handle_early_exit_flags(args: &Args) -> Result<Option<()>> {
    if args.generate_config {
        let config_manager = ConfigManager::new(datagrid::APP_NAME)?;
        let path = config_manager.write_default_config(args.force)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(Some(()));
    }
    Ok(None)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(()) = handle_early_exit_flags(&args)? {
        return Ok(());
    }

    let config = AppConfig::load(datagrid::APP_NAME)?;
    init_logging(&config.logging.level, args.debug)?;

    let path = args
        .path
        .as_deref()
        .ok_or_else(|| eyre!("A grid document path is required"))?;
    let document = GridDocument::from_path(path)?;
    let mut view = document.into_view(GridOptions::from_config(&config))?;
    apply_args(&mut view, &args)?;

    match args.output {
        OutputFormat::Table => println!("{}", datagrid::render::render_table(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.snapshot())?),
    }
    Ok(())
}
