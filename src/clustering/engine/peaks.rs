//! Cluster peaks, valleys and the hom-hi-lo contrast statistic.
//!
//! Purpose
//! -------
//! Support sample-level QC on a whole array's contrast values: fit the three
//! genotype peaks with a fixed seed, find the least populated point between
//! neighbouring peaks, and compare peak against valley densities. A sample
//! whose homozygote peaks barely rise above the valleys has poorly
//! separated genotype clusters.
//!
//! Key behaviors
//! -------------
//! - [`cluster_peaks`] runs [`PrimeEM::em_estimate`] from
//!   [`EMSeed::peak_finding`] and returns the three fitted means.
//! - [`contrast_density`] is the percentage of samples in the half-open bin
//!   `(x − bin, x + bin]`.
//! - [`cluster_valley`] scans from `x1` towards `x2` in steps of `2·bin`,
//!   always evaluating `x2` itself, and returns the lowest-density point
//!   (the first one on ties).
//! - [`hom_hi_lo`] combines the three with a halved bin and reports the
//!   smaller and larger peak-minus-valley density.
//!
//! Invariants & assumptions
//! ------------------------
//! - Bin widths must be finite and strictly positive.
//! - [`hom_hi_lo`] does not require ordered peaks: a dropped cluster's mean
//!   is reset to 0 and may land on the wrong side of its neighbour, in which
//!   case the valley scan returns its start point and the statistic is still
//!   reported. [`HomHiLo::check_ordered`] lets callers insist on order.
use crate::clustering::{
    core::{options::EMOptions, seed::EMSeed},
    engine::em::PrimeEM,
    errors::{EMError, EMResult},
};

/// Lower bound on |homozygote peak| used by [`hom_hi_lo`].
pub const HOM_HI_LO_MIN_CENTER: f64 = 0.1;

/// Fit the BB, AB and AA peaks of a contrast sequence.
///
/// Parameters
/// ----------
/// - `contrast`: contrast values of one sample across markers.
/// - `threshold`: confidence threshold handed to the engine.
/// - `min_center`: smallest distance of either homozygote peak from zero.
///
/// Errors
/// ------
/// - `EMError::EmptyData` / `EMError::NonFiniteData` for bad contrasts.
/// - `EMError::InvalidOption` for a non-finite threshold.
pub fn cluster_peaks(contrast: &[f64], threshold: f64, min_center: f64) -> EMResult<[f64; 3]> {
    let mut em = PrimeEM::new(EMOptions::default())?;
    em.set_data(contrast)?;
    em.set_threshold(threshold)?;
    let est = em.em_estimate(&EMSeed::peak_finding(min_center))?;
    Ok([est.mean[0], est.mean[1], est.mean[2]])
}

/// Percentage of `contrast` values in `(x − bin, x + bin]`; 0 when empty.
pub fn contrast_density(contrast: &[f64], x: f64, bin: f64) -> f64 {
    if contrast.is_empty() {
        return 0.0;
    }
    let (lb, ub) = (x - bin, x + bin);
    let count = contrast.iter().filter(|&&c| c > lb && c <= ub).count();
    100.0 * (count as f64 / contrast.len() as f64)
}

/// Lowest-density point on the scan from `x1` to `x2`.
///
/// Errors
/// ------
/// - `EMError::InvalidOption` when `bin` is not finite and positive.
pub fn cluster_valley(contrast: &[f64], x1: f64, x2: f64, bin: f64) -> EMResult<f64> {
    check_bin(bin)?;
    let mut valley = x1;
    let mut valley_density = contrast_density(contrast, x1, bin);
    let mut x = x1;
    while x < x2 {
        x = (x + 2.0 * bin).min(x2);
        let density = contrast_density(contrast, x, bin);
        if density < valley_density {
            valley = x;
            valley_density = density;
        }
    }
    Ok(valley)
}

/// Peak/valley summary of one contrast sequence.
///
/// Fields
/// ------
/// - `peaks`: fitted BB, AB, AA means.
/// - `valleys`: BB/AB and AB/AA valley positions.
/// - `peak_density`: densities at the BB and AA peaks.
/// - `valley_density`: densities at the two valleys.
/// - `min_hom_hi_lo` / `max_hom_hi_lo`: smaller and larger of the two
///   peak-minus-valley differences.
#[derive(Debug, Clone, PartialEq)]
pub struct HomHiLo {
    pub peaks: [f64; 3],
    pub valleys: [f64; 2],
    pub peak_density: [f64; 2],
    pub valley_density: [f64; 2],
    pub min_hom_hi_lo: f64,
    pub max_hom_hi_lo: f64,
}

impl HomHiLo {
    /// BB peak density minus the BB/AB valley density.
    pub fn bb_diff(&self) -> f64 {
        self.peak_density[0] - self.valley_density[0]
    }

    /// AA peak density minus the AB/AA valley density.
    pub fn aa_diff(&self) -> f64 {
        self.peak_density[1] - self.valley_density[1]
    }

    /// Whether the fitted peaks are strictly increasing.
    pub fn peaks_ordered(&self) -> bool {
        self.peaks[0] < self.peaks[1] && self.peaks[1] < self.peaks[2]
    }

    /// Errors
    /// ------
    /// - `EMError::UnorderedPeaks` when the fitted peaks are not increasing.
    pub fn check_ordered(&self) -> EMResult<()> {
        if self.peaks_ordered() { Ok(()) } else { Err(EMError::UnorderedPeaks { peaks: self.peaks }) }
    }
}

/// Hom-hi-lo statistic of a contrast sequence.
///
/// Parameters
/// ----------
/// - `contrast`: contrast values of one sample.
/// - `threshold`: confidence threshold for the peak fit.
/// - `bin_size`: full bin width; densities use half of it on each side of
///   a point.
///
/// Errors
/// ------
/// - `EMError::InvalidOption` for a non-positive bin.
/// - Any error of [`cluster_peaks`].
pub fn hom_hi_lo(contrast: &[f64], threshold: f64, bin_size: f64) -> EMResult<HomHiLo> {
    check_bin(bin_size)?;
    let bin = bin_size / 2.0;
    let peaks = cluster_peaks(contrast, threshold, HOM_HI_LO_MIN_CENTER)?;

    let valleys = [
        cluster_valley(contrast, peaks[0], peaks[1], bin)?,
        cluster_valley(contrast, peaks[1], peaks[2], bin)?,
    ];
    let peak_density =
        [contrast_density(contrast, peaks[0], bin), contrast_density(contrast, peaks[2], bin)];
    let valley_density =
        [contrast_density(contrast, valleys[0], bin), contrast_density(contrast, valleys[1], bin)];

    let lo_gap = peak_density[0] - valley_density[0];
    let hi_gap = peak_density[1] - valley_density[1];
    Ok(HomHiLo {
        peaks,
        valleys,
        peak_density,
        valley_density,
        min_hom_hi_lo: lo_gap.min(hi_gap),
        max_hom_hi_lo: lo_gap.max(hi_gap),
    })
}

fn check_bin(bin: f64) -> EMResult<()> {
    if bin.is_finite() && bin > 0.0 {
        Ok(())
    } else {
        Err(EMError::InvalidOption { name: "bin_width", value: bin, reason: "must be finite and > 0" })
    }
}
