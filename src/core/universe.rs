//! # Universo de Discurso
//!
//! Domínio numérico limitado e discretizado `[min, max]` com passo fixo.
//! É usado apenas para **amostrar** a variável de saída durante a
//! defuzzificação — a fuzzificação das entradas é contínua.
//!
//! ```text
//! Universe::new(0.0, 100.0, 1.0)
//!   → 0, 1, 2, ..., 100        (101 pontos)
//!
//! Universe::new(0.0, 10.0, 0.1)
//!   → 0.0, 0.1, ..., 10.0      (101 pontos)
//! ```
//!
//! O número de pontos é `floor((max − min) / step) + 1`. Cada ponto é
//! calculado como `min + i × step` (sem acumular soma), evitando deriva de
//! ponto flutuante em universos com passo fracionário.

use serde::{Deserialize, Serialize};

use super::error::{FuzzyError, Result};

/// Tolerância usada no cálculo da contagem de pontos.
///
/// `(10.0 - 0.0) / 0.1` resulta em `99.99999999999999`; sem a tolerância o
/// último ponto do universo seria perdido.
const COUNT_EPSILON: f64 = 1e-9;

/// Universo discretizado, imutável após construção.
#[derive(Clone, Debug, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
    points: Vec<f64>,
}

impl Universe {
    /// Cria um universo validando `min < max` e `step > 0` (todos finitos).
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidUniverse`] se os limites forem inconsistentes.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        let valid = min.is_finite() && max.is_finite() && step.is_finite() && min < max && step > 0.0;
        if !valid {
            return Err(FuzzyError::InvalidUniverse { min, max, step });
        }

        let count = ((max - min) / step + COUNT_EPSILON).floor() as usize + 1;
        let points = (0..count).map(|i| min + i as f64 * step).collect();

        Ok(Self {
            min,
            max,
            step,
            points,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Pontos amostrados, em ordem crescente.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` se `x` está dentro de `[min, max]`.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Forma serializável de um universo (usada na configuração JSON).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniverseSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl UniverseSpec {
    pub fn build(&self) -> Result<Universe> {
        Universe::new(self.min, self.max, self.step)
    }
}
