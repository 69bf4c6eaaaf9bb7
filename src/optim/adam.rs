use crate::layers::dense::{Dense, Gradients};
use crate::math::matrix::Matrix;
use crate::optim::Optimizer;

/// Adaptive moment estimation.
///
/// Keeps running first (`m`) and second (`v`) moment estimates per parameter
/// matrix and applies the bias-corrected update
/// `θ ← θ - lr · m̂ / (√v̂ + ε)`.
#[derive(Debug, Clone)]
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    step: u32,
    // (weights, biases) moments, lazily shaped on the first update.
    m: Vec<(Matrix, Matrix)>,
    v: Vec<(Matrix, Matrix)>,
}

impl Adam {
    pub fn new(learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64) -> Adam {
        Adam {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            step: 0,
            m: Vec::new(),
            v: Vec::new(),
        }
    }

    /// Number of updates applied so far.
    pub fn steps(&self) -> u32 {
        self.step
    }

    fn update(&self, param: &Matrix, grad: &Matrix, m: &mut Matrix, v: &mut Matrix) -> Matrix {
        let (b1, b2) = (self.beta1, self.beta2);
        *m = m.zip_map(grad, |m, g| b1 * m + (1.0 - b1) * g);
        *v = v.zip_map(grad, |v, g| b2 * v + (1.0 - b2) * g * g);

        let t = self.step as i32;
        let m_correction = 1.0 - b1.powi(t);
        let v_correction = 1.0 - b2.powi(t);
        let (lr, eps) = (self.learning_rate, self.epsilon);

        let change = m.zip_map(v, |m, v| {
            let m_hat = m / m_correction;
            let v_hat = v / v_correction;
            lr * m_hat / (v_hat.sqrt() + eps)
        });
        param - &change
    }
}

impl Default for Adam {
    fn default() -> Self {
        Adam::new(0.001, 0.9, 0.999, 1e-7)
    }
}

impl Optimizer for Adam {
    fn apply(&mut self, layers: &mut [Dense], grads: &[Gradients]) {
        assert_eq!(layers.len(), grads.len(), "one gradient per layer");
        if self.m.len() != layers.len() {
            let zeros = |l: &Dense| (
                Matrix::zeros(l.weights.rows, l.weights.cols),
                Matrix::zeros(l.biases.rows, l.biases.cols),
            );
            self.m = layers.iter().map(zeros).collect();
            self.v = layers.iter().map(zeros).collect();
        }

        self.step += 1;

        let mut m = std::mem::take(&mut self.m);
        let mut v = std::mem::take(&mut self.v);
        for (i, (layer, g)) in layers.iter_mut().zip(grads).enumerate() {
            layer.weights = self.update(&layer.weights, &g.weights, &mut m[i].0, &mut v[i].0);
            layer.biases = self.update(&layer.biases, &g.biases, &mut m[i].1, &mut v[i].1);
        }
        self.m = m;
        self.v = v;
    }
}
