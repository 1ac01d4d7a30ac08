// Host-side tests for spectrum scanning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod analysis {
        include!("../src/core/analysis.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use crate::core::analysis::*;

#[test]
fn silence_yields_zero_snapshot() {
    let bins = vec![0u8; 2048];
    let snap = scan_spectrum(&bins, 48_000.0, AmplitudeMetric::PeakRun);
    assert_eq!(snap, FrequencySnapshot::default());
    assert_eq!(snap.loudest_frequency_hz, 0.0);
    assert_eq!(snap.average_amplitude, 0.0);
}

#[test]
fn empty_buffer_yields_zero_snapshot() {
    for metric in [AmplitudeMetric::PeakRun, AmplitudeMetric::Mean] {
        assert_eq!(scan_spectrum(&[], 44_100.0, metric), FrequencySnapshot::default());
    }
}

#[test]
fn loudest_bin_converts_to_hz() {
    let mut bins = vec![0u8; 2048];
    bins[21] = 200;
    bins[40] = 120;
    let snap = scan_spectrum(&bins, 48_000.0, AmplitudeMetric::PeakRun);
    // 48000 / 2048 = 23.4375 Hz per bin
    assert!((snap.loudest_frequency_hz - 21.0 * 23.4375).abs() < 1e-3);
}

#[test]
fn peak_run_sums_only_new_maxima() {
    // running maxima: 10, 20, 30; the repeated 20 and the 5 do not count
    let bins = [10u8, 5, 20, 20, 30];
    let snap = scan_spectrum(&bins, 1000.0, AmplitudeMetric::PeakRun);
    assert!((snap.average_amplitude - 60.0 / 5.0).abs() < 1e-6);
    assert!((snap.loudest_frequency_hz - 4.0 * 200.0).abs() < 1e-3);
}

#[test]
fn first_of_equal_peaks_wins() {
    let bins = [0u8, 50, 50, 10];
    let snap = scan_spectrum(&bins, 400.0, AmplitudeMetric::PeakRun);
    assert!((snap.loudest_frequency_hz - 100.0).abs() < 1e-4);
}

#[test]
fn peak_run_is_not_a_true_mean() {
    // a descending spectrum only ever records its first bin
    let bins = [200u8, 150, 100, 50];
    let peak = scan_spectrum(&bins, 1000.0, AmplitudeMetric::PeakRun);
    let mean = scan_spectrum(&bins, 1000.0, AmplitudeMetric::Mean);
    assert!((peak.average_amplitude - 50.0).abs() < 1e-6);
    assert!((mean.average_amplitude - 500.0 / (4.0 * 255.0)).abs() < 1e-6);
    assert_eq!(peak.loudest_frequency_hz, mean.loudest_frequency_hz);
}

#[test]
fn mean_metric_is_normalized() {
    let full = [255u8; 16];
    let snap = scan_spectrum(&full, 1000.0, AmplitudeMetric::Mean);
    assert!((snap.average_amplitude - 1.0).abs() < 1e-6);

    let half = [255u8, 255, 0, 0];
    let snap = scan_spectrum(&half, 1000.0, AmplitudeMetric::Mean);
    assert!((snap.average_amplitude - 0.5).abs() < 1e-6);
}

#[test]
fn bin_to_hz_handles_empty_buffers() {
    assert_eq!(bin_to_hz(5, 48_000.0, 0), 0.0);
    assert_eq!(bin_to_hz(0, 48_000.0, 2048), 0.0);
    assert!((bin_to_hz(1024, 48_000.0, 2048) - 24_000.0).abs() < 1e-2);
}
