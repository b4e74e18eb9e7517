//! End-to-end tests: synthetic image in, export artifacts on disk, decoded
//! back and checked.

use std::fs;

use pretty_assertions::assert_eq;

use cube_quant::{compose, Palette};
use cubemosaic::export;
use cubemosaic::pipeline::{self, PipelineOptions};

#[test]
fn solid_color_mosaic_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    image::RgbImage::from_pixel(60, 60, image::Rgb([0, 155, 72]))
        .save(&input)
        .unwrap();

    let palette = Palette::cube_classic();
    let options = PipelineOptions {
        cubes_across: 2,
        sticker_px: 4,
        ..Default::default()
    };
    let result = pipeline::run(&input, &palette, &options).unwrap();
    assert_eq!(result.plan.stickers_across, 6);
    assert_eq!(result.plan.stickers_high, 6);

    // Mosaic PNG: every pixel is the green sticker color.
    let mosaic = dir.path().join("mosaic.png");
    export::write_mosaic_png(&mosaic, &result.raster, &palette, 4).unwrap();
    let decoded = image::open(&mosaic).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (24, 24));
    assert!(decoded.pixels().all(|p| p.0 == [0, 155, 72]));

    // CSV table: header plus one line per cube, all green.
    let table = dir.path().join("cubes.csv");
    let records = compose::cube_table(&result.raster, &palette);
    export::write_table_csv(&table, &records).unwrap();
    let csv = fs::read_to_string(&table).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("cube_x,cube_y,row0,row1,row2"));
    assert_eq!(lines.next(), Some("0,0,GGG,GGG,GGG"));
    assert_eq!(csv.lines().count(), 1 + 4);

    // Cube archive: one entry per cube with the documented naming.
    let archive = dir.path().join("cubes.zip");
    export::write_cube_archive(&archive, &result.raster, &palette, 4).unwrap();
    let mut zip = zip::ZipArchive::new(fs::File::open(&archive).unwrap()).unwrap();
    assert_eq!(zip.len(), 4);
    assert!(zip.by_name("cube_000_000.png").is_ok());
    assert!(zip.by_name("cube_001_001.png").is_ok());
}

#[test]
fn gradient_produces_identical_artifacts_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    image::RgbImage::from_fn(96, 48, |x, y| {
        image::Rgb([(x * 2) as u8, (y * 5) as u8, 128])
    })
    .save(&input)
    .unwrap();

    let palette = Palette::cube_classic();
    let options = PipelineOptions {
        cubes_across: 4,
        sticker_px: 2,
        blur_sigma: 0.5,
        ..Default::default()
    };

    let first = pipeline::run(&input, &palette, &options).unwrap();
    let second = pipeline::run(&input, &palette, &options).unwrap();
    assert_eq!(first.raster, second.raster);

    let out_a = dir.path().join("a.png");
    let out_b = dir.path().join("b.png");
    export::write_mosaic_png(&out_a, &first.raster, &palette, 2).unwrap();
    export::write_mosaic_png(&out_b, &second.raster, &palette, 2).unwrap();
    assert_eq!(fs::read(&out_a).unwrap(), fs::read(&out_b).unwrap());

    // The mosaic only ever contains palette colors.
    let decoded = image::open(&out_a).unwrap().to_rgb8();
    let allowed: Vec<[u8; 3]> = (0..palette.len())
        .map(|i| palette.rgb(i).to_bytes())
        .collect();
    assert!(decoded.pixels().all(|p| allowed.contains(&p.0)));
}

#[test]
fn json_table_matches_raster() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    image::RgbImage::from_pixel(30, 30, image::Rgb([170, 16, 31]))
        .save(&input)
        .unwrap();

    let palette = Palette::cube_classic();
    let options = PipelineOptions {
        cubes_across: 1,
        sticker_px: 1,
        ..Default::default()
    };
    let result = pipeline::run(&input, &palette, &options).unwrap();

    let table = dir.path().join("cubes.json");
    let records = compose::cube_table(&result.raster, &palette);
    export::write_table_json(&table, &records).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&table).unwrap()).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["cube_x"], 0);
    assert_eq!(list[0]["cube_y"], 0);
    assert_eq!(list[0]["rows"][0], "RRR");
}

#[test]
fn custom_palette_flows_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    image::RgbImage::from_pixel(30, 30, image::Rgb([10, 10, 10]))
        .save(&input)
        .unwrap();

    let palette: Palette = "K:#000000,W:#FFFFFF".parse().unwrap();
    let options = PipelineOptions {
        cubes_across: 1,
        sticker_px: 1,
        ..Default::default()
    };
    let result = pipeline::run(&input, &palette, &options).unwrap();
    let records = compose::cube_table(&result.raster, &palette);
    assert_eq!(records[0].rows, ["KKK", "KKK", "KKK"]);
}
