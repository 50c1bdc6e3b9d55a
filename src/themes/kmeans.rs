// Seeded k-means over dense rows.
//
// k-means++ seeding followed by Lloyd iterations, repeated `n_init` times
// from a single RNG seeded with `seed`. The lowest-inertia run wins; on a
// tie the earlier run is kept. No global random state is touched, so two
// clusterers with the same seed produce identical results on any thread.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{AnalysisError, Result};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_N_INIT: usize = 10;
const DEFAULT_MAX_ITER: usize = 300;
const DEFAULT_TOL: f64 = 1e-4;

#[derive(Debug, Clone)]
pub struct KMeans {
    pub k: usize,
    /// Number of independent restarts
    pub n_init: usize,
    pub max_iter: usize,
    /// Convergence tolerance, relative to the mean per-feature variance
    pub tol: f64,
    pub seed: u64,
}

/// Result of a fit: centroids in cluster-index order, one label per row.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    pub centroids: Vec<Vec<f64>>,
    pub labels: Vec<usize>,
    pub inertia: f64,
}

impl KMeansFit {
    /// Number of rows assigned to each cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.centroids.len()];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }
}

impl KMeans {
    pub fn new(k: usize, seed: u64) -> Self {
        Self {
            k,
            n_init: DEFAULT_N_INIT,
            max_iter: DEFAULT_MAX_ITER,
            tol: DEFAULT_TOL,
            seed,
        }
    }

    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KMeansFit> {
        let n_features = data.first().map(Vec::len).unwrap_or(0);
        if self.k == 0 || data.len() < self.k || n_features == 0 {
            return Err(AnalysisError::DegenerateCluster {
                requested: self.k,
                samples: data.len(),
                features: n_features,
            });
        }

        let tol = self.tol * mean_variance(data);
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut best: Option<KMeansFit> = None;

        for run in 0..self.n_init.max(1) {
            let init = kmeans_plus_plus(data, self.k, &mut rng);
            let fit = lloyd(data, init, self.max_iter, tol);
            debug!(run, inertia = fit.inertia, "k-means run finished");

            let better = best.as_ref().map_or(true, |b| fit.inertia < b.inertia);
            if better {
                best = Some(fit);
            }
        }

        // n_init is at least 1, so a run always exists
        best.ok_or(AnalysisError::DegenerateCluster {
            requested: self.k,
            samples: data.len(),
            features: n_features,
        })
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn mean_variance(data: &[Vec<f64>]) -> f64 {
    let n = data.len() as f64;
    let dims = data[0].len();
    let mut total = 0.0;
    for d in 0..dims {
        let mean = data.iter().map(|row| row[d]).sum::<f64>() / n;
        total += data.iter().map(|row| (row[d] - mean).powi(2)).sum::<f64>() / n;
    }
    total / dims as f64
}

/// Index of the nearest centroid and the squared distance to it.
/// Ties go to the lower index.
fn nearest(row: &[f64], centroids: &[Vec<f64>]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (i, c) in centroids.iter().enumerate() {
        let d = squared_distance(row, c);
        if d < best.1 {
            best = (i, d);
        }
    }
    best
}

/// k-means++ seeding: each new centroid is drawn with probability
/// proportional to its squared distance from the closest existing one.
fn kmeans_plus_plus(data: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(data[rng.random_range(0..data.len())].clone());

    let mut closest: Vec<f64> = data
        .iter()
        .map(|row| squared_distance(row, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = closest.iter().sum();
        let pick = if total > 0.0 {
            let target = rng.random::<f64>() * total;
            let mut acc = 0.0;
            let mut chosen = data.len() - 1;
            for (i, d) in closest.iter().enumerate() {
                acc += d;
                if acc > target {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            // Every row coincides with a centroid already
            rng.random_range(0..data.len())
        };

        let centroid = data[pick].clone();
        for (i, row) in data.iter().enumerate() {
            closest[i] = closest[i].min(squared_distance(row, &centroid));
        }
        centroids.push(centroid);
    }

    centroids
}

fn lloyd(data: &[Vec<f64>], mut centroids: Vec<Vec<f64>>, max_iter: usize, tol: f64) -> KMeansFit {
    let k = centroids.len();
    let dims = data[0].len();
    let mut labels = vec![0usize; data.len()];

    for _ in 0..max_iter {
        let mut distances = vec![0.0; data.len()];
        for (i, row) in data.iter().enumerate() {
            let (label, dist) = nearest(row, &centroids);
            labels[i] = label;
            distances[i] = dist;
        }

        let mut sums = vec![vec![0.0; dims]; k];
        let mut counts = vec![0usize; k];
        for (row, &label) in data.iter().zip(&labels) {
            counts[label] += 1;
            for (s, x) in sums[label].iter_mut().zip(row) {
                *s += x;
            }
        }

        let mut shift = 0.0;
        for c in 0..k {
            let updated = if counts[c] > 0 {
                sums[c].iter().map(|s| s / counts[c] as f64).collect()
            } else {
                // Relocate an empty cluster onto the worst-served row
                let far = distances
                    .iter()
                    .enumerate()
                    .fold(0, |best, (i, &d)| if d > distances[best] { i } else { best });
                distances[far] = 0.0;
                data[far].clone()
            };
            shift += squared_distance(&centroids[c], &updated);
            centroids[c] = updated;
        }

        if shift <= tol {
            break;
        }
    }

    let mut inertia = 0.0;
    for (i, row) in data.iter().enumerate() {
        let (label, dist) = nearest(row, &centroids);
        labels[i] = label;
        inertia += dist;
    }

    KMeansFit {
        centroids,
        labels,
        inertia,
    }
}
