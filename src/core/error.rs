//! # Erros do Motor Fuzzy
//!
//! Taxonomia de falhas do motor de inferência. Existem dois grupos bem
//! distintos:
//!
//! | Grupo | Variantes | Quando acontece |
//! |-------|-----------|-----------------|
//! | **Configuração** | `UnknownTerm`, `UnknownVariable`, `InvalidUniverse`, `InvalidMembership`, `DuplicateTerm`, `DuplicateVariable`, `OutputMismatch`, `EmptyRuleBase` | Construção das bases de regras (startup) |
//! | **Avaliação** | `MissingInput`, `NoMatchingRule`, `NonFiniteOutput` | Uma chamada de inferência |
//!
//! Erros de configuração devem derrubar o processo no startup. Erros de
//! avaliação são absorvidos pelo [`RiskAnalyzer`](crate::analyzer::RiskAnalyzer),
//! que substitui o score pelo valor padrão.

use thiserror::Error;

use super::variable::{Term, Variable};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    #[error("termo '{term}' não registrado na variável '{variable}'")]
    UnknownTerm { variable: Variable, term: Term },

    #[error("variável '{0}' não faz parte da base de regras")]
    UnknownVariable(Variable),

    #[error("entrada ausente para a variável '{0}'")]
    MissingInput(Variable),

    #[error("nenhuma regra disparou para a entrada")]
    NoMatchingRule,

    #[error("centróide não finito: {0}")]
    NonFiniteOutput(f64),

    #[error("universo inválido [{min}, {max}] passo {step}")]
    InvalidUniverse { min: f64, max: f64, step: f64 },

    #[error("função de pertinência inválida ({a}, {b}, {c}): exige a ≤ b ≤ c finitos")]
    InvalidMembership { a: f64, b: f64, c: f64 },

    #[error("termo '{term}' registrado duas vezes na variável '{variable}'")]
    DuplicateTerm { variable: Variable, term: Term },

    #[error("variável '{0}' declarada duas vezes")]
    DuplicateVariable(Variable),

    #[error("consequente aponta para '{found}', mas a saída da base é '{expected}'")]
    OutputMismatch { expected: Variable, found: Variable },

    #[error("base de regras vazia")]
    EmptyRuleBase,
}

impl FuzzyError {
    /// `true` para o caso esperado de "nenhuma regra disparou".
    ///
    /// Permite distinguir, nos logs, uma entrada fora da cobertura das regras
    /// de um defeito real de configuração ou numérico.
    pub fn is_no_match(&self) -> bool {
        matches!(self, FuzzyError::NoMatchingRule)
    }
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
