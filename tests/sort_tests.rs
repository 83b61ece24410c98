// tests/sort_tests.rs
use animesort_core::{FileOutcome, OutputLayout, SortDecision};
use animesort_cv::detection::detector::draw_regions;
use animesort_cv::detection::{AnnotationStyle, DetectionConfig};
use animesort_cv::opencv::core::Mat;
use animesort_cv::opencv::prelude::*;
use animesort_cv::traits::PatternDetector;
use animesort_cv::{FaceSorter, Region, RegionSet, Result, SortError};
use std::fs;
use std::path::Path;

/// Stub detector: reports one region for images at least `min_width` wide.
struct SizeThresholdDetector {
    min_width: i32,
    style: AnnotationStyle,
}

impl SizeThresholdDetector {
    fn new(min_width: i32) -> Self {
        Self {
            min_width,
            style: AnnotationStyle::default(),
        }
    }
}

impl PatternDetector for SizeThresholdDetector {
    fn detect(&self, image: &Mat) -> Result<RegionSet> {
        let mut regions = RegionSet::new();
        if image.cols() >= self.min_width {
            regions.push(Region::new(4, 4, 16, 16));
        }
        Ok(regions)
    }

    fn annotate(&self, image: &mut Mat, regions: &RegionSet) -> Result<()> {
        draw_regions(image, regions, &self.style)
    }
}

fn write_png(path: &Path, width: u32, height: u32) {
    let img = image::ImageBuffer::from_pixel(width, height, image::Rgb([200u8, 30, 30]));
    img.save(path).unwrap();
}

fn outcome_for<'a>(
    report: &'a animesort_core::RunReport,
    file_name: &str,
) -> &'a FileOutcome {
    &report
        .iter()
        .find(|entry| entry.file_name == file_name)
        .unwrap()
        .outcome
}

#[test]
fn routes_matches_and_non_matches() -> Result<()> {
    let input = tempfile::tempdir()?;
    let out = tempfile::tempdir()?;

    // a.png is wide enough to trigger the stub, b.png is not
    write_png(&input.path().join("a.png"), 64, 64);
    write_png(&input.path().join("b.png"), 32, 32);

    let layout = OutputLayout::rooted_at(out.path().join("output"));
    let sorter = FaceSorter::with_detector(SizeThresholdDetector::new(64), layout.clone());

    let report = sorter.run(input.path())?;
    let stats = report.stats();

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.matched, 1);
    assert_eq!(stats.unmatched, 1);
    assert_eq!(stats.skipped, 0);

    assert_eq!(
        outcome_for(&report, "a.png"),
        &FileOutcome::Sorted {
            decision: SortDecision::Match,
            regions: 1
        }
    );
    assert_eq!(
        outcome_for(&report, "b.png"),
        &FileOutcome::Sorted {
            decision: SortDecision::NoMatch,
            regions: 0
        }
    );

    // Base names survive, directories are replaced
    let matched = layout.match_dir().join("a.png");
    let unmatched = layout.unmatch_dir().join("b.png");
    assert!(matched.is_file());
    assert!(unmatched.is_file());
    assert!(!layout.match_dir().join("b.png").exists());
    assert!(!layout.unmatch_dir().join("a.png").exists());

    // No-match output is byte-identical; annotated match differs
    assert_eq!(
        fs::read(input.path().join("b.png"))?,
        fs::read(&unmatched)?
    );
    assert_ne!(fs::read(input.path().join("a.png"))?, fs::read(&matched)?);

    Ok(())
}

#[test]
fn skips_undecodable_files_and_continues() -> Result<()> {
    let input = tempfile::tempdir()?;
    let out = tempfile::tempdir()?;

    write_png(&input.path().join("c.png"), 32, 32);
    fs::write(input.path().join("notes.txt"), b"not an image")?;

    let layout = OutputLayout::rooted_at(out.path().join("output"));
    let sorter = FaceSorter::with_detector(SizeThresholdDetector::new(1000), layout.clone());

    let report = sorter.run(input.path())?;
    let stats = report.stats();

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.unmatched, 1);
    assert_eq!(stats.skipped, 1);

    assert!(matches!(
        outcome_for(&report, "notes.txt"),
        FileOutcome::Skipped { .. }
    ));

    // Skipped file produces no output in either directory
    assert!(layout.unmatch_dir().join("c.png").is_file());
    assert!(!layout.match_dir().join("notes.txt").exists());
    assert!(!layout.unmatch_dir().join("notes.txt").exists());

    Ok(())
}

#[test]
fn write_failure_aborts_the_run() -> Result<()> {
    let input = tempfile::tempdir()?;
    let out = tempfile::tempdir()?;

    write_png(&input.path().join("b.png"), 32, 32);
    write_png(&input.path().join("c.png"), 32, 32);

    let layout = OutputLayout::rooted_at(out.path().join("output"));
    // Occupy b.png's destination with a directory so the copy fails
    fs::create_dir_all(layout.unmatch_dir().join("b.png"))?;

    let sorter = FaceSorter::with_detector(SizeThresholdDetector::new(1000), layout.clone());
    let result = sorter.run(input.path());

    assert!(matches!(result, Err(SortError::Io { .. })));

    // Write errors abort: c.png sorts after b.png and is never written
    assert!(!layout.unmatch_dir().join("c.png").exists());
    assert!(!layout.match_dir().join("c.png").exists());

    Ok(())
}

#[test]
fn missing_model_fails_before_any_processing() {
    let out = tempfile::tempdir().unwrap();
    let output_root = out.path().join("output");

    let config = DetectionConfig {
        cascade_path: out.path().join("no-such-cascade.xml"),
        output: OutputLayout::rooted_at(&output_root),
        ..Default::default()
    };

    let result = FaceSorter::new(config);
    assert!(matches!(result, Err(SortError::MissingModel { .. })));
    assert!(!output_root.exists());
}

#[test]
fn unreadable_input_dir_produces_no_output() {
    let out = tempfile::tempdir().unwrap();
    let output_root = out.path().join("output");

    let layout = OutputLayout::rooted_at(&output_root);
    let sorter = FaceSorter::with_detector(SizeThresholdDetector::new(1), layout);

    let result = sorter.run("no/such/input");
    assert!(matches!(result, Err(SortError::ListDir { .. })));
    assert!(!output_root.exists());
}

#[test]
fn report_export_round_trips_as_json() -> Result<()> {
    let input = tempfile::tempdir()?;
    let out = tempfile::tempdir()?;

    write_png(&input.path().join("a.png"), 64, 64);

    let layout = OutputLayout::rooted_at(out.path().join("output"));
    let sorter = FaceSorter::with_detector(SizeThresholdDetector::new(64), layout.clone());
    let report = sorter.run(input.path())?;

    let report_path = out.path().join("report.json");
    sorter.export_json(&report, &report_path)?;

    let json = fs::read_to_string(&report_path)?;
    let parsed: animesort_core::RunReport = serde_json::from_str(&json)?;
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.stats().matched, 1);

    Ok(())
}
