// Frequency-domain snapshot extraction from an analyser byte spectrum.
//
// Kept free of browser types so the scan can be exercised on the host. The
// web frontend fills a byte buffer from the `AnalyserNode` and hands it here.

use super::constants::BYTE_AMPLITUDE_MAX;

/// One frame's read of the live input: dominant pitch and loudness estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrequencySnapshot {
    pub loudest_frequency_hz: f64,
    pub average_amplitude: f64,
}

/// How `average_amplitude` is derived from the spectrum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmplitudeMetric {
    /// Sum of the amplitudes that set a new running maximum, over the buffer length.
    #[default]
    PeakRun,
    /// Mean of every bin, normalized to 0..1.
    Mean,
}

/// Scan a byte spectrum for its loudest bin and an amplitude estimate.
///
/// `bins` is the full analysis buffer (its length is the FFT size). Silence,
/// a disconnected analyser or an empty buffer all yield the zero snapshot.
pub fn scan_spectrum(bins: &[u8], sample_rate: f32, metric: AmplitudeMetric) -> FrequencySnapshot {
    if bins.is_empty() {
        return FrequencySnapshot::default();
    }
    let len = bins.len() as f64;

    let mut max_amp = 0u8;
    let mut largest_bin: Option<usize> = None;
    let mut peak_run_sum = 0u32;
    let mut total = 0u32;
    for (i, &amp) in bins.iter().enumerate() {
        total += amp as u32;
        if amp > max_amp {
            max_amp = amp;
            largest_bin = Some(i);
            peak_run_sum += amp as u32;
        }
    }

    let loudest_frequency_hz = largest_bin
        .map(|bin| bin_to_hz(bin, sample_rate as f64, bins.len()))
        .unwrap_or(0.0);
    let average_amplitude = match metric {
        AmplitudeMetric::PeakRun => peak_run_sum as f64 / len,
        AmplitudeMetric::Mean => total as f64 / (len * BYTE_AMPLITUDE_MAX),
    };

    FrequencySnapshot {
        loudest_frequency_hz,
        average_amplitude,
    }
}

/// Centre frequency of `bin` for a buffer of `buffer_len` bins at `sample_rate`.
#[inline]
pub fn bin_to_hz(bin: usize, sample_rate: f64, buffer_len: usize) -> f64 {
    if buffer_len == 0 {
        return 0.0;
    }
    bin as f64 * (sample_rate / buffer_len as f64)
}
