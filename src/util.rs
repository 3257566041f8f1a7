use std::fs;

use clap::ArgMatches;
use serde_json::json;

use crate::color::{classes_to_string, color_classes, ColoringInstance};
use crate::compact_instance::CompactInstance;
use crate::config::SearchConfig;
use crate::edge_list::solution_to_string;
use crate::error::{ColorError, Result};
use crate::search::cp_backtrack::ColoringResult;
use crate::{dimacs, edge_list};

/// parameters read from the command line
#[derive(Debug, Clone, Default)]
pub struct Params {
    /// instance file
    pub inst_filename: String,
    /// instance format ("edgelist" or "dimacs")
    pub instance_type: String,
    /// search parameters (defaults < JSON configuration file < command line)
    pub config: SearchConfig,
    /// where to write the result ("nb_colors optimal" + colors)
    pub sol_file: Option<String>,
    /// where to write the color classes
    pub classes_file: Option<String>,
    /// where to write the search statistics (JSON)
    pub perf_file: Option<String>,
}

fn parse_secs(main_args:&ArgMatches, name:&'static str) -> Result<Option<f64>> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(e) => e.parse::<f64>().map(Some)
            .map_err(|_| ColorError::InvalidArgument { name, value: e.to_string() }),
    }
}

/** reads command line input and returns the parameters */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default().to_string();
    let instance_type = main_args.value_of("type").unwrap_or("edgelist").to_string();
    let mut config = match main_args.value_of("config") {
        None => SearchConfig::default(),
        Some(filename) => SearchConfig::from_file(filename)?,
    };
    if let Some(t) = parse_secs(main_args, "time")? {
        config = config.with_time_limit(t);
    }
    if let Some(t) = parse_secs(main_args, "progress")? {
        config = config.with_progress_interval(t);
    }
    let sol_file = main_args.value_of("solution").map(|e| e.to_string());
    let classes_file = main_args.value_of("classes").map(|e| e.to_string());
    let perf_file = main_args.value_of("perf").map(|e| e.to_string());
    Ok(Params { inst_filename, instance_type, config, sol_file, classes_file, perf_file })
}

/// reads the instance designated by the parameters
pub fn read_instance(params:&Params) -> Result<CompactInstance> {
    let instance = match params.instance_type.as_str() {
        "dimacs" => dimacs::from_file(&params.inst_filename)?,
        "edgelist" => edge_list::from_file(&params.inst_filename)?,
        other => return Err(ColorError::InvalidArgument { name: "type", value: other.to_string() }),
    };
    instance.display_statistics();
    Ok(instance)
}

fn write_file(filename:&str, content:&str) -> Result<()> {
    fs::write(filename, content)
        .map_err(|source| ColorError::Io { path: filename.to_string(), source })
}

/// exports search results to files
pub fn export_results(params:&Params, result:&ColoringResult) -> Result<()> {
    // export statistics
    if let Some(filename) = &params.perf_file {
        let stats = json!({
            "primal_list": result.stats.primal_list,
            "nb_nodes": result.stats.nb_nodes,
            "time_searched": result.stats.time_searched,
            "optimal": result.optimal,
            "inst_name": params.inst_filename,
        });
        write_file(filename, &stats.to_string())?;
    }
    // export solution
    if let Some(filename) = &params.sol_file {
        write_file(filename, &solution_to_string(&result.colors, result.nb_colors, result.optimal))?;
    }
    if let Some(filename) = &params.classes_file {
        write_file(filename, &classes_to_string(&color_classes(&result.colors)))?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use clap::{App, Arg};

    fn app() -> App<'static, 'static> {
        App::new("test")
            .arg(Arg::with_name("instance").required(true).index(1))
            .arg(Arg::with_name("type").long("type").takes_value(true))
            .arg(Arg::with_name("time").long("time").takes_value(true))
            .arg(Arg::with_name("progress").long("progress").takes_value(true))
            .arg(Arg::with_name("config").long("config").takes_value(true))
            .arg(Arg::with_name("solution").long("solution").takes_value(true))
            .arg(Arg::with_name("classes").long("classes").takes_value(true))
            .arg(Arg::with_name("perf").long("perf").takes_value(true))
    }

    #[test]
    fn test_read_params_defaults() {
        let matches = app().get_matches_from(vec!["test", "insts/gc_4_1"]);
        let params = read_params(&matches).unwrap();
        assert_eq!(params.inst_filename, "insts/gc_4_1");
        assert_eq!(params.instance_type, "edgelist");
        assert_eq!(params.config, SearchConfig::default());
        assert!(params.sol_file.is_none());
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let matches = app().get_matches_from(vec![
            "test", "insts/gc_4_1", "--config", "insts/search_config.json", "--time", "3",
        ]);
        let params = read_params(&matches).unwrap();
        assert_eq!(params.config.time_limit_secs, 3.);
        assert_eq!(params.config.progress_interval_secs, 5.);
    }

    #[test]
    fn test_invalid_time() {
        let matches = app().get_matches_from(vec!["test", "insts/gc_4_1", "--time", "soon"]);
        assert!(matches!(
            read_params(&matches),
            Err(ColorError::InvalidArgument { name: "time", .. })
        ));
    }

    #[test]
    fn test_read_instance_unknown_type() {
        let params = Params {
            inst_filename: "insts/gc_4_1".to_string(),
            instance_type: "json".to_string(),
            ..Params::default()
        };
        assert!(matches!(read_instance(&params), Err(ColorError::InvalidArgument { .. })));
    }

    #[test]
    fn test_read_instance_dimacs() {
        let params = Params {
            inst_filename: "insts/grid-instances/grid2x2".to_string(),
            instance_type: "dimacs".to_string(),
            ..Params::default()
        };
        assert_eq!(read_instance(&params).unwrap().nb_vertices(), 4);
    }
}
