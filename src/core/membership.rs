//! # Função de Pertinência Triangular
//!
//! Mapeia um valor real `x` para um **grau de verdade** em `[0, 1]`.
//! A forma é definida por três pontos `(a, b, c)` com `a ≤ b ≤ c`:
//!
//! ```text
//!  1.0 ┤        ╱╲
//!      │       ╱  ╲
//!      │      ╱    ╲
//!  0.0 ┼─────╱──────╲─────
//!            a   b   c
//! ```
//!
//! | Faixa de `x` | Grau |
//! |--------------|------|
//! | `x = b` | `1` |
//! | `x ≤ a` ou `x ≥ c` | `0` |
//! | `a < x < b` | `(x − a) / (b − a)` |
//! | `b < x < c` | `(c − x) / (c − b)` |
//!
//! Os casos degenerados `a = b` (ombro esquerdo vertical) e `b = c`
//! (ombro direito vertical) são válidos. A ordem das comparações garante
//! que nenhuma divisão por zero aconteça: cada rampa só é calculada quando
//! `x` está estritamente entre seus extremos.
//!
//! A avaliação é **total** — qualquer `f64` (inclusive `NaN` e infinitos)
//! produz um grau válido.

use serde::{Deserialize, Serialize};

use super::error::{FuzzyError, Result};

/// Função de pertinência triangular `(a, b, c)`.
///
/// Na configuração JSON é representada como um array `[a, b, c]`; a
/// desserialização passa pela mesma validação de [`MembershipFunction::triangular`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct MembershipFunction {
    a: f64,
    b: f64,
    c: f64,
}

impl MembershipFunction {
    /// Cria uma função triangular, exigindo `a ≤ b ≤ c` e pontos finitos.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidMembership`] se a ordem ou finitude não for respeitada.
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        let finite = a.is_finite() && b.is_finite() && c.is_finite();
        if !finite || a > b || b > c {
            return Err(FuzzyError::InvalidMembership { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Grau de pertinência de `x`, sempre em `[0, 1]`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;

        if x == b {
            return 1.0;
        }
        // NaN falha em todas as comparações abaixo; tratado explicitamente.
        if x.is_nan() || x <= a || x >= c {
            return 0.0;
        }

        let degree = if x < b {
            (x - a) / (b - a)
        } else {
            (c - x) / (c - b)
        };
        degree.clamp(0.0, 1.0)
    }

    /// Pontos `(a, b, c)`.
    pub fn points(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Suporte da função: intervalo onde o grau pode ser positivo.
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }
}

impl TryFrom<[f64; 3]> for MembershipFunction {
    type Error = FuzzyError;

    fn try_from([a, b, c]: [f64; 3]) -> Result<Self> {
        Self::triangular(a, b, c)
    }
}

impl From<MembershipFunction> for [f64; 3] {
    fn from(mf: MembershipFunction) -> Self {
        [mf.a, mf.b, mf.c]
    }
}
