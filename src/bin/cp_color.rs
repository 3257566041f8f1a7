use clap::{App, load_yaml};
use tracing::{error, info};

use cp_color::edge_list::solution_to_string;
use cp_color::error::Result;
use cp_color::search::cp_backtrack::solve;
use cp_color::util::{export_results, read_instance, read_params};


fn run() -> Result<()> {
    // parse arguments
    let yaml = load_yaml!("cp_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    info!(instance = params.inst_filename.as_str(), time_limit = params.config.time_limit_secs, "reading instance");
    let instance = read_instance(&params)?;

    // solve it
    let result = solve(&instance, &params.config);
    info!(
        nb_colors = result.nb_colors,
        optimal = result.optimal,
        time_searched = result.stats.time_searched,
        "search done"
    );
    println!("{}", solution_to_string(&result.colors, result.nb_colors, result.optimal));

    // export results
    export_results(&params, &result)
}

/** colors an instance with the constraint-propagation branch-and-bound */
pub fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
