//! Integration tests for grid extraction and the batch loop

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::{ImageFormat, Rgb, RgbImage};

use flowsteal::{
    decode_image, Cell, FlowError, FlowResult, FlowStealer, GridExtractor, GridShape, ImageSource,
    LetterGrid, StealConfig,
};

const CELL: u32 = 100;
const MARGIN: u32 = 16;
const BACKGROUND: [u8; 3] = [0, 0, 0];

/// Color of a letter; increases with the letter so sorted order is kept
fn letter_color(color: u8) -> [u8; 3] {
    [30 + color * 8, 200 - color * 5, 120]
}

/// Draw a board the way solution pictures look: heads as filled cells,
/// path cells as a band through the center that leaves the probe pixels
/// above and below on the background.
fn render_board(grid: &LetterGrid) -> RgbImage {
    let shape = grid.shape();
    let width = shape.cols as u32 * CELL + MARGIN;
    let height = shape.rows as u32 * CELL + MARGIN;
    let mut img = RgbImage::from_pixel(width, height, Rgb(BACKGROUND));

    for row in 0..shape.rows {
        for col in 0..shape.cols {
            let cell = grid.get(row, col).unwrap();
            let Some(color) = cell.color() else { continue };
            let pixel = Rgb(letter_color(color));
            for dy in 0..CELL {
                if !cell.is_head() && !(35..65).contains(&dy) {
                    continue;
                }
                for dx in 0..CELL {
                    img.put_pixel(
                        MARGIN / 2 + col as u32 * CELL + dx,
                        MARGIN / 2 + row as u32 * CELL + dy,
                        pixel,
                    );
                }
            }
        }
    }
    img
}

fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

/// Serves PNG images from memory keyed by URL
struct FixtureSource {
    images: HashMap<String, Vec<u8>>,
}

impl ImageSource for FixtureSource {
    fn fetch(&self, url: &str) -> FlowResult<Vec<u8>> {
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| FlowError::Transfer(format!("{} returned HTTP 404", url)))
    }
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("flowsteal_it_{}", name));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn test_config(name: &str, first: u32, last: u32) -> StealConfig {
    let mut config = StealConfig::default();
    config.base_url = "http://fixtures.test/flow-".to_string();
    config.first_index = first;
    config.last_index = last;
    config.output_dir = temp_dir(name);
    config
}

const SOLVED: &str = "AaaaB\nCccAb\nDdCEb\nEdDeb\neeeeB";

#[test]
fn test_solid_cells_give_distinct_uppercase_letters() {
    // 25 distinct colors, one per cell, no connectors
    let cells = (0..25u8).map(|i| Cell::Head { color: i }).collect();
    let grid = LetterGrid::new(GridShape::default(), cells).unwrap();
    let img = render_board(&grid);

    let extracted = GridExtractor::default().extract(&img, GridShape::default()).unwrap();
    assert_eq!(extracted.render(), "ABCDE\nFGHIJ\nKLMNO\nPQRST\nUVWXY");
    assert!(extracted.cells().iter().all(Cell::is_head));
}

#[test]
fn test_rendered_solution_round_trips() {
    let grid = LetterGrid::parse(SOLVED, GridShape::default()).unwrap();
    let img = render_board(&grid);

    let extracted = GridExtractor::default().extract(&img, GridShape::default()).unwrap();
    assert_eq!(extracted.render(), SOLVED);
    assert!(extracted.is_solved());
}

#[test]
fn test_round_trip_through_png() {
    let shape = GridShape::new(6, 4).unwrap();
    let text = "AaaB\nbbbb\nbCcc\nbDdc\nbbdc\nBDCC";
    let grid = LetterGrid::parse(text, shape).unwrap();

    let decoded = decode_image(&png_bytes(&render_board(&grid))).unwrap();
    let extracted = GridExtractor::default().extract(&decoded, shape).unwrap();
    assert_eq!(extracted.render(), text);
}

#[test]
fn test_twenty_seven_colors_fail() {
    let shape = GridShape::new(6, 6).unwrap();
    let cells = (0..36u8).map(|i| Cell::Head { color: i.min(26) }).collect();
    let grid = LetterGrid::new(shape, cells).unwrap();
    let img = render_board(&grid);

    let result = GridExtractor::default().extract(&img, shape);
    assert!(matches!(result, Err(FlowError::TooManyColors(27))));
}

#[test]
fn test_batch_writes_one_file_per_image() {
    let boards = [SOLVED, "AAAAA\nBBBBB\nCCCCC\nDDDDD\nEEEEE"];
    let config = test_config("batch", 6, 7);
    let images = boards
        .iter()
        .zip(6..)
        .map(|(text, index)| {
            let grid = LetterGrid::parse(text, GridShape::default()).unwrap();
            (format!("http://fixtures.test/flow-{}.png", index), png_bytes(&render_board(&grid)))
        })
        .collect();

    let stealer = FlowStealer::with_source(config.clone(), FixtureSource { images });
    let report = stealer.run().unwrap();

    assert!(report.is_success());
    assert_eq!(report.saved, vec![config.output_dir.join("5x5_6.txt"), config.output_dir.join("5x5_7.txt")]);
    assert_eq!(fs::read_to_string(config.output_dir.join("5x5_6.txt")).unwrap(), SOLVED);
    assert_eq!(
        fs::read_to_string(config.output_dir.join("5x5_7.txt")).unwrap(),
        "AAAAA\nBBBBB\nCCCCC\nDDDDD\nEEEEE"
    );
}

#[test]
fn test_missing_image_aborts_batch() {
    let config = test_config("abort", 1, 2);
    let grid = LetterGrid::parse(SOLVED, GridShape::default()).unwrap();
    let mut images = HashMap::new();
    images.insert("http://fixtures.test/flow-2.png".to_string(), png_bytes(&render_board(&grid)));

    let stealer = FlowStealer::with_source(config.clone(), FixtureSource { images });

    assert!(matches!(stealer.run(), Err(FlowError::Transfer(_))));
    assert!(!config.output_dir.join("5x5_2.txt").exists());
}

#[test]
fn test_keep_going_records_failures() {
    let mut config = test_config("keep_going", 1, 3);
    config.keep_going = true;
    let grid = LetterGrid::parse(SOLVED, GridShape::default()).unwrap();
    let mut images = HashMap::new();
    images.insert("http://fixtures.test/flow-1.png".to_string(), b"not a png".to_vec());
    images.insert("http://fixtures.test/flow-3.png".to_string(), png_bytes(&render_board(&grid)));

    let stealer = FlowStealer::with_source(config.clone(), FixtureSource { images });
    let report = stealer.run().unwrap();

    assert_eq!(report.saved, vec![config.output_dir.join("5x5_3.txt")]);
    let failed: Vec<u32> = report.failures.iter().map(|(index, _)| *index).collect();
    assert_eq!(failed, vec![1, 2]);
    assert!(!report.is_success());
}

#[test]
fn test_steal_returns_text_without_writing() {
    let config = test_config("steal_only", 4, 4);
    let grid = LetterGrid::parse(SOLVED, GridShape::default()).unwrap();
    let mut images = HashMap::new();
    images.insert("http://fixtures.test/flow-4.png".to_string(), png_bytes(&render_board(&grid)));

    let stealer = FlowStealer::with_source(config.clone(), FixtureSource { images });

    assert_eq!(stealer.steal(4).unwrap(), SOLVED);
    assert!(!config.output_dir.exists());
}
