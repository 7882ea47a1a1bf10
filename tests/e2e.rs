mod common;

use common::synthetic_image::{single_pixel, textured_rgb};
use edge_filter::image::{load_rgb_image, save_rgb_image};
use edge_filter::{apply_laplacian, output_path, run_batch, ElapsedTotal, FilterOptions, Rgb};
use std::fs;
use std::path::PathBuf;

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("edge-filter-{tag}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn ppm_round_trip_preserves_pixels() {
    let dir = scratch_dir("roundtrip");
    let path = dir.join("texture.ppm");

    let img = textured_rgb(12, 7);
    save_rgb_image(&img, &path).expect("save ppm");
    let back = load_rgb_image(&path).expect("load ppm");
    assert_eq!(back, img);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn batch_filters_every_input_and_sums_timings() {
    let dir = scratch_dir("batch");
    let inputs: Vec<PathBuf> = (0..3)
        .map(|i| {
            let path = dir.join(format!("input{i}.ppm"));
            let img = single_pixel(4 + i, 4, 1, 1, Rgb { r: 255, g: 0, b: 0 });
            save_rgb_image(&img, &path).expect("save input");
            path
        })
        .collect();

    let options = FilterOptions::default();
    let total = ElapsedTotal::new();
    let report = run_batch(&inputs, &options, &total).expect("batch succeeds");

    // jobs come back in input order with positional output names
    assert_eq!(report.jobs.len(), 3);
    for (i, input) in inputs.iter().enumerate() {
        assert_eq!(report.jobs[i].input, input.display().to_string());

        let out_path = output_path(i + 1, input);
        assert_eq!(
            out_path.file_name().and_then(|n| n.to_str()),
            Some(format!("laplacian{}.ppm", i + 1).as_str())
        );
        let written = load_rgb_image(&out_path).expect("output readable");
        let expected = apply_laplacian(&load_rgb_image(input).expect("input readable"), &options);
        assert_eq!(written, expected.image, "output {} differs", i + 1);
    }

    // the shared total is the exact sum of the per-job timings
    let summed: f64 = report.jobs.iter().map(|j| j.elapsed_ms).sum();
    assert!(
        (report.total_ms - summed).abs() < 1e-9,
        "total {} != sum {summed}",
        report.total_ms
    );
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_input_fails_the_batch() {
    let dir = scratch_dir("missing");
    let inputs = vec![dir.join("does_not_exist.ppm")];
    let err = run_batch(&inputs, &FilterOptions::default(), &ElapsedTotal::new()).unwrap_err();
    assert!(
        err.contains("does_not_exist.ppm"),
        "error should name the file: {err}"
    );
    fs::remove_dir_all(&dir).ok();
}
