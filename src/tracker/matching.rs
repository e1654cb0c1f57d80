//! Matching utilities for centroid-based tracking.

use ndarray::Array2;

use crate::tracker::rect::Centroid;

/// Compute the pairwise Euclidean distance matrix between tracked-object
/// centroids and candidate centroids.
///
/// Returns a matrix of shape (M, N) where M is the length of
/// `object_centroids` and N is the length of `input_centroids`.
pub fn centroid_distance(
    object_centroids: &[Centroid],
    input_centroids: &[Centroid],
) -> Array2<f64> {
    let mut dists = Array2::zeros((object_centroids.len(), input_centroids.len()));
    for (i, o) in object_centroids.iter().enumerate() {
        for (j, c) in input_centroids.iter().enumerate() {
            dists[[i, j]] = o.distance(c);
        }
    }
    dists
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedy nearest-first assignment over a distance matrix.
///
/// Rows are visited in ascending order of their minimum distance, so objects
/// with an unambiguous closest candidate are resolved before ambiguous ones.
/// Each row claims only its single closest column (first index on ties); if
/// that column is already consumed the row goes unmatched. This is a greedy
/// heuristic, not an optimal assignment, and deliberately so: identity
/// stability downstream depends on its tie-breaking.
pub fn greedy_assignment(cost_matrix: &Array2<f64>) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    if num_rows == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_detections: (0..num_cols).collect(),
        };
    }

    if num_cols == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: vec![],
        };
    }

    // Per-row (min value, argmin column), first column index on ties.
    let mut row_best = vec![(f64::INFINITY, 0usize); num_rows];
    for i in 0..num_rows {
        for j in 0..num_cols {
            let d = cost_matrix[[i, j]];
            if d < row_best[i].0 {
                row_best[i] = (d, j);
            }
        }
    }

    let mut rows: Vec<usize> = (0..num_rows).collect();
    rows.sort_by(|&a, &b| row_best[a].0.total_cmp(&row_best[b].0));

    let mut used_rows = vec![false; num_rows];
    let mut used_cols = vec![false; num_cols];
    let mut matches = Vec::new();

    for &row in &rows {
        let col = row_best[row].1;
        if used_rows[row] || used_cols[col] {
            continue;
        }
        used_rows[row] = true;
        used_cols[col] = true;
        matches.push((row, col));
    }

    let unmatched_tracks = used_rows
        .iter()
        .enumerate()
        .filter_map(|(i, &used)| if used { None } else { Some(i) })
        .collect();
    let unmatched_detections = used_cols
        .iter()
        .enumerate()
        .filter_map(|(j, &used)| if used { None } else { Some(j) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}
