use rand::Rng;

use crate::data::target::TargetFunction;
use crate::math::matrix::Matrix;

/// One training batch: `inputs` and `targets`, both `B x 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub inputs: Matrix,
    pub targets: Matrix,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.inputs.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Draws uniform inputs from `[lo, hi]` and labels them with a target function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    pub lo: f64,
    pub hi: f64,
    pub target: TargetFunction,
}

impl Sampler {
    /// # Panics
    /// Panics unless `lo` and `hi` are finite with `lo <= hi` and a finite
    /// width `hi - lo`.
    pub fn new(lo: f64, hi: f64, target: TargetFunction) -> Sampler {
        assert!(lo.is_finite() && hi.is_finite(), "sampling bounds must be finite");
        assert!(lo <= hi, "sampling interval is empty: [{}, {}]", lo, hi);
        assert!((hi - lo).is_finite(), "sampling interval is too wide: [{}, {}]", lo, hi);
        Sampler { lo, hi, target }
    }

    /// `batch_size` independent draws from U[lo, hi] and their targets.
    /// Only `rng` is advanced.
    pub fn sample<R: Rng + ?Sized>(&self, batch_size: usize, rng: &mut R) -> Batch {
        let draws: Vec<f64> = (0..batch_size)
            .map(|_| rng.gen_range(self.lo..=self.hi))
            .collect();
        let inputs = Matrix::column(&draws);
        let targets = self.target.eval_matrix(&inputs);
        Batch { inputs, targets }
    }
}

/// `n` evenly spaced points from `lo` to `hi` inclusive, as an `n x 1` column.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Matrix {
    let values: Vec<f64> = match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    };
    Matrix::column(&values)
}
