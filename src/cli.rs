//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `flowsteal` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("flowsteal")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert Flow puzzle solution images into letter grids")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file overriding the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("shape")
                .long("shape")
                .help("Grid shape as <rows>x<cols> (e.g. 5x5)")
                .value_name("RxC")
                .required(false),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("URL prefix the image index is appended to")
                .value_name("URL")
                .required(false),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory receiving the grid files")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("first")
                .long("first")
                .help("First image index")
                .value_name("INDEX")
                .required(false),
        )
        .arg(
            Arg::new("last")
                .long("last")
                .help("Last image index (inclusive)")
                .value_name("INDEX")
                .required(false),
        )
        .arg(
            Arg::new("margin")
                .long("margin")
                .help("Horizontal border around the board in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("keep-going")
                .long("keep-going")
                .help("Log failed images and continue with the next one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract the grid from a local image file")
                .value_name("IMAGE")
                .conflicts_with("check")
                .required(false),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Check a grid file and report whether it is solved")
                .value_name("GRID")
                .required(false),
        )
        .arg(
            Arg::new("strip")
                .long("strip")
                .help("With --check, print the puzzle form of the grid")
                .requires("check")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for --extract or --check")
                .value_name("FILE")
                .required(false),
        )
}
