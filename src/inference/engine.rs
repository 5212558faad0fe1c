//! # Motor de Inferência Mamdani
//!
//! Avalia uma [`RuleBase`] contra uma tupla de entradas crisp e produz o
//! conjunto fuzzy agregado da variável de saída.
//!
//! ## Pipeline
//!
//! ```text
//! Inputs ──► firing strength de cada regra        (antecedente, min/max)
//!        ──► implicação: min(força, μ_consequente(y))  para cada y do universo
//!        ──► agregação: max ponto a ponto entre todas as regras
//!        ──► FuzzySet (entregue ao defuzzificador)
//! ```
//!
//! A implicação por mínimo "corta" o triângulo do consequente na altura da
//! força de disparo:
//!
//! ```text
//!  1.0 ┤      ╱╲                  1.0 ┤
//!      │     ╱  ╲      força=0.5      │
//!  0.5 ┤    ╱    ╲        ──►     0.5 ┤    ╱‾‾‾‾╲
//!  0.0 ┼───╱──────╲───            0.0 ┼───╱──────╲───
//! ```
//!
//! ## Concorrência
//!
//! [`InferenceEngine`] não tem estado. Toda chamada aloca seu próprio
//! contexto (forças de disparo e amostras agregadas), e a base de regras é
//! apenas lida — chamadas paralelas não precisam de sincronização.

use super::{Inputs, RuleBase};
use crate::core::{MembershipFunction, Result, Universe};

/// Conjunto fuzzy amostrado sobre um universo: um grau por ponto.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet<'u> {
    universe: &'u Universe,
    degrees: Vec<f64>,
}

impl<'u> FuzzySet<'u> {
    /// Função zero sobre o universo.
    pub fn empty(universe: &'u Universe) -> Self {
        Self {
            universe,
            degrees: vec![0.0; universe.len()],
        }
    }

    /// Conjunto implicado por uma regra: `min(strength, μ(y))` em cada ponto.
    pub fn implied(universe: &'u Universe, consequent: &MembershipFunction, strength: f64) -> Self {
        let degrees = universe
            .points()
            .iter()
            .map(|&y| strength.min(consequent.evaluate(y)))
            .collect();
        Self { universe, degrees }
    }

    /// Agregação por máximo ponto a ponto (in-place).
    pub fn union_with(&mut self, other: &FuzzySet<'_>) {
        debug_assert_eq!(self.degrees.len(), other.degrees.len());
        for (mine, theirs) in self.degrees.iter_mut().zip(&other.degrees) {
            *mine = mine.max(*theirs);
        }
    }

    pub fn universe(&self) -> &'u Universe {
        self.universe
    }

    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Pares `(y, μ(y))`.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.universe
            .points()
            .iter()
            .copied()
            .zip(self.degrees.iter().copied())
    }

    /// Maior grau do conjunto.
    pub fn height(&self) -> f64 {
        self.degrees.iter().copied().fold(0.0, f64::max)
    }

    /// `true` se o conjunto é a função zero.
    pub fn is_zero(&self) -> bool {
        self.degrees.iter().all(|&d| d == 0.0)
    }
}

/// Motor de inferência — struct sem estado.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Força de disparo de cada regra, na ordem da base.
    pub fn firing_strengths(rule_base: &RuleBase, inputs: &Inputs) -> Result<Vec<f64>> {
        rule_base
            .rules()
            .iter()
            .map(|rule| rule.antecedent.evaluate(rule_base.inputs(), inputs))
            .collect()
    }

    /// Executa fuzzificação, implicação e agregação.
    ///
    /// Regras com força zero contribuem a função zero e são puladas. Se
    /// nenhuma regra disparar, o resultado é a função zero — cabe ao
    /// defuzzificador sinalizar isso.
    pub fn infer<'r>(rule_base: &'r RuleBase, inputs: &Inputs) -> Result<FuzzySet<'r>> {
        let strengths = Self::firing_strengths(rule_base, inputs)?;
        let output = rule_base.output();
        let mut aggregate = FuzzySet::empty(output.universe());

        for (rule, &strength) in rule_base.rules().iter().zip(&strengths) {
            if strength <= 0.0 {
                continue;
            }
            let consequent = output.term(rule.consequent.term)?;
            let implied = FuzzySet::implied(output.universe(), consequent, strength);
            aggregate.union_with(&implied);
        }

        tracing::trace!(?strengths, height = aggregate.height(), "Inferência concluída");
        Ok(aggregate)
    }
}
