/*!
    Best-frame selection via histogram comparison.

    Picks the candidate whose color distribution sits closest to the
    average distribution of the whole candidate window. Outlier frames —
    black frames, fades, scene cuts — land far from the average and are
    skipped. Simplified version of the algorithm by Vadim Zaliva
    (<http://notbrainsurgery.livejournal.com/29773.html>).
*/

use thumbnail_types::VideoFrame;

/// Number of histogram buckets, one per byte value.
pub const HIST_SIZE: usize = 256;

/// Number of histogram channels.
///
/// The primary plane is scanned as interleaved 3-channel samples
/// regardless of the true pixel format. Not an exact per-channel
/// decode, but a stable content signature.
pub const HIST_CHANNELS: usize = 3;

type Histogram = [[u32; HIST_CHANNELS]; HIST_SIZE];
type AverageHistogram = [[f64; HIST_CHANNELS]; HIST_SIZE];

/**
    Build the byte-value histogram of a frame's primary plane.

    Scans every byte of every row, stride-wide, so decoder row padding is
    counted the same way for every candidate.
*/
fn build_histogram(frame: &VideoFrame) -> Box<Histogram> {
    let mut hist: Box<Histogram> = Box::new([[0; HIST_CHANNELS]; HIST_SIZE]);
    let Some(plane) = frame.primary_plane() else {
        return hist;
    };
    // A degenerate plane contributes no samples.
    if plane.stride == 0 {
        return hist;
    }
    for row in plane
        .data
        .chunks_exact(plane.stride)
        .take(frame.height as usize)
    {
        for (j, &byte) in row.iter().enumerate() {
            hist[byte as usize][j % HIST_CHANNELS] += 1;
        }
    }
    hist
}

/// Sum-square deviation from the average, to estimate closeness.
fn compute_error(hist: &Histogram, average: &AverageHistogram) -> f64 {
    let mut sum_sq_err = 0.0;
    for i in 0..HIST_SIZE {
        for j in 0..HIST_CHANNELS {
            let err = average[i][j] - f64::from(hist[i][j]);
            sum_sq_err += err * err;
        }
    }
    sum_sq_err
}

/**
    Select the most representative frame out of a non-empty candidate set.

    A single candidate is returned as-is without any histogram work. With
    more candidates, the one with the minimum sum of squared deviations
    from the component-wise average histogram wins; ties go to the
    earliest frame. All other frames are dropped.
*/
pub fn select_best(mut frames: Vec<VideoFrame>) -> VideoFrame {
    debug_assert!(!frames.is_empty());
    if frames.len() == 1 {
        return frames.remove(0);
    }

    let hists: Vec<Box<Histogram>> = frames.iter().map(build_histogram).collect();

    // Component-wise mean across candidates
    let mut average: Box<AverageHistogram> = Box::new([[0.0; HIST_CHANNELS]; HIST_SIZE]);
    for hist in &hists {
        for i in 0..HIST_SIZE {
            for j in 0..HIST_CHANNELS {
                average[i][j] += f64::from(hist[i][j]);
            }
        }
    }
    let count = hists.len() as f64;
    for bucket in average.iter_mut() {
        for cell in bucket.iter_mut() {
            *cell /= count;
        }
    }

    // First strict minimum wins
    let mut min_sq_err = f64::MAX;
    let mut best = 0;
    for (i, hist) in hists.iter().enumerate() {
        let sq_err = compute_error(hist, &average);
        if sq_err < min_sq_err {
            best = i;
            min_sq_err = sq_err;
        }
    }
    frames.swap_remove(best)
}
