//! Grid file check command
//!
//! Parses a letter grid file and reports its colors and whether it is a
//! complete solution. With `--strip` it prints the unsolved puzzle.

use std::fs;
use std::path::Path;
use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::resolve_config;
use crate::errors::{FlowError, FlowResult};
use crate::grid::{GridShape, LetterGrid};
use crate::utils::logger::Logger;
use crate::utils::write_utils;

/// Command checking a grid file
pub struct CheckCommand<'a> {
    /// Path to the grid file
    input_file: String,
    /// Where to write the stripped puzzle, stdout if missing
    output_file: Option<String>,
    /// Print the puzzle form instead of the report
    strip: bool,
    /// Rows and columns of the grid
    shape: GridShape,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new CheckCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> FlowResult<Self> {
        let input_file = args.get_one::<String>("check")
            .ok_or_else(|| FlowError::GenericError("Missing grid file".to_string()))?
            .clone();

        let config = resolve_config(args)?;

        Ok(CheckCommand {
            input_file,
            output_file: args.get_one::<String>("output").cloned(),
            strip: args.get_flag("strip"),
            shape: config.shape,
            logger,
        })
    }

    /// Human-readable summary of a grid
    pub fn report(grid: &LetterGrid) -> String {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        format!(
            "Shape: {}\nColors: {}\nTwo heads per color: {}\nLegal paths: {}\nSolved: {}",
            grid.shape(),
            grid.num_colors(),
            yes_no(grid.has_valid_heads()),
            yes_no(grid.is_legal()),
            yes_no(grid.is_solved()),
        )
    }
}

impl<'a> Command for CheckCommand<'a> {
    fn execute(&self) -> FlowResult<()> {
        info!("Checking {}", self.input_file);
        let text = fs::read_to_string(&self.input_file)?;
        let grid = LetterGrid::parse(&text, self.shape)?;
        debug!("Parsed grid:\n{}", grid);

        let output = if self.strip {
            grid.strip().render()
        } else {
            CheckCommand::report(&grid)
        };
        self.logger.log_grid(&format!("Check of {}:", self.input_file), &output)?;

        match &self.output_file {
            Some(path) => write_utils::write_text_file(Path::new(path), &output)?,
            None => println!("{}", output),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;

    fn run_check(name: &str, grid: &str, extra: &[&str]) -> String {
        let dir = std::env::temp_dir().join(format!("flowsteal_check_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let grid_path = dir.join("5x5_1.txt");
        fs::write(&grid_path, grid).unwrap();
        let output_path = dir.join("result.txt");

        let mut argv = vec![
            "flowsteal",
            "--check", grid_path.to_str().unwrap(),
            "-o", output_path.to_str().unwrap(),
        ];
        argv.extend_from_slice(extra);
        let args = build_cli().try_get_matches_from(argv).unwrap();
        let logger = Logger::new(dir.join("check.log").to_str().unwrap()).unwrap();

        CheckCommand::new(&args, &logger).unwrap().execute().unwrap();
        fs::read_to_string(&output_path).unwrap()
    }

    #[test]
    fn test_strip_writes_puzzle() {
        let puzzle = run_check("strip", "AaaaB\nCccAb\nDdCEb\nEdDeb\neeeeB", &["--strip"]);

        assert_eq!(puzzle, "A...B\nC..A.\nD.CE.\nE.D..\n....B");
    }

    #[test]
    fn test_check_writes_report() {
        let report = run_check("report", "AaaaB\nCccAb\nDdCEb\nEdDeb\neeeeB\n", &[]);

        assert!(report.starts_with("Shape: 5x5\nColors: 5\n"));
        assert!(report.ends_with("Solved: yes"));
    }

    #[test]
    fn test_report() {
        let grid = LetterGrid::parse("AA\nBB", GridShape::new(2, 2).unwrap()).unwrap();

        assert_eq!(
            CheckCommand::report(&grid),
            "Shape: 2x2\nColors: 2\nTwo heads per color: yes\nLegal paths: yes\nSolved: yes"
        );
    }
}
