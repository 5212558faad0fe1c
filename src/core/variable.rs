//! # Variáveis Linguísticas
//!
//! Uma variável linguística é uma grandeza (ex.: `wind_speed`) cujos valores
//! são **termos** (ex.: `calm`, `severe`) em vez de números. Cada termo é
//! ligado a uma [`MembershipFunction`] sobre o universo da variável.
//!
//! ## Enumerações Fechadas
//!
//! Variáveis e termos são enums — não strings. Um termo digitado errado na
//! definição de uma regra não compila; um termo que existe no enum mas não
//! foi registrado na variável é detectado na construção da
//! [`RuleBase`](crate::inference::RuleBase), antes de qualquer avaliação.
//!
//! ```text
//! wind_speed ─┬─ calm      (0, 5, 10)
//!             ├─ light     (8, 15, 25)
//!             ├─ moderate  (20, 35, 50)
//!             ├─ strong    (45, 60, 75)
//!             └─ severe    (70, 85, 100)
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{FuzzyError, Result};
use super::membership::MembershipFunction;
use super::universe::{Universe, UniverseSpec};

/// Variáveis conhecidas pelo sistema: quatro entradas e uma saída.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Temperature,
    Humidity,
    WindSpeed,
    Visibility,
    Risk,
}

impl Variable {
    /// As quatro variáveis de entrada, na ordem canônica.
    pub const INPUTS: [Variable; 4] = [
        Variable::Temperature,
        Variable::Humidity,
        Variable::WindSpeed,
        Variable::Visibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variable::Temperature => "temperature",
            Variable::Humidity => "humidity",
            Variable::WindSpeed => "wind_speed",
            Variable::Visibility => "visibility",
            Variable::Risk => "risk",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Termos linguísticos disponíveis.
///
/// Nem todo termo faz sentido para toda variável — `calm` só existe em
/// `wind_speed`, `excellent` só em `visibility`. Quais termos cada variável
/// aceita é decidido pelo registro em [`LinguisticVariable::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    Calm,
    Light,
    Moderate,
    Strong,
    Severe,
    Good,
    Excellent,
}

impl Term {
    pub fn as_str(&self) -> &'static str {
        match self {
            Term::VeryLow => "very_low",
            Term::Low => "low",
            Term::Medium => "medium",
            Term::High => "high",
            Term::VeryHigh => "very_high",
            Term::Calm => "calm",
            Term::Light => "light",
            Term::Moderate => "moderate",
            Term::Strong => "strong",
            Term::Severe => "severe",
            Term::Good => "good",
            Term::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variável linguística: nome, universo e termos registrados.
///
/// Imutável após construção — compartilhada por referência entre todas as
/// chamadas de inferência.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    variable: Variable,
    universe: Universe,
    terms: BTreeMap<Term, MembershipFunction>,
}

impl LinguisticVariable {
    /// Constrói a variável registrando cada termo uma única vez.
    ///
    /// Um termo cujo triângulo sai do universo declarado é aceito (fora do
    /// universo o grau simplesmente é 0), mas gera um `warn` no log.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::DuplicateTerm`] se o mesmo termo aparecer duas vezes.
    pub fn new(
        variable: Variable,
        universe: Universe,
        terms: impl IntoIterator<Item = (Term, MembershipFunction)>,
    ) -> Result<Self> {
        let mut registered = BTreeMap::new();
        for (term, mf) in terms {
            let (lo, hi) = mf.support();
            if !universe.contains(lo) || !universe.contains(hi) {
                tracing::warn!(
                    %variable,
                    %term,
                    lo,
                    hi,
                    min = universe.min(),
                    max = universe.max(),
                    "Termo excede o universo da variável"
                );
            }
            if registered.insert(term, mf).is_some() {
                return Err(FuzzyError::DuplicateTerm { variable, term });
            }
        }
        Ok(Self {
            variable,
            universe,
            terms: registered,
        })
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Função de pertinência do termo.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::UnknownTerm`] se o termo não foi registrado nesta variável.
    pub fn term(&self, term: Term) -> Result<&MembershipFunction> {
        self.terms.get(&term).ok_or(FuzzyError::UnknownTerm {
            variable: self.variable,
            term,
        })
    }

    /// Fuzzificação: grau de `x` no termo, avaliado direto sobre o valor contínuo.
    pub fn fuzzify(&self, term: Term, x: f64) -> Result<f64> {
        Ok(self.term(term)?.evaluate(x))
    }

    pub fn has_term(&self, term: Term) -> bool {
        self.terms.contains_key(&term)
    }

    /// Termos registrados, em ordem do enum.
    pub fn terms(&self) -> impl Iterator<Item = (Term, &MembershipFunction)> {
        self.terms.iter().map(|(term, mf)| (*term, mf))
    }
}

/// Forma serializável de uma variável linguística.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    pub variable: Variable,
    pub universe: UniverseSpec,
    /// Termo → `[a, b, c]`.
    pub terms: BTreeMap<Term, MembershipFunction>,
}

impl VariableSpec {
    pub fn build(&self) -> Result<LinguisticVariable> {
        LinguisticVariable::new(
            self.variable,
            self.universe.build()?,
            self.terms.iter().map(|(term, mf)| (*term, *mf)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wind() -> LinguisticVariable {
        LinguisticVariable::new(
            Variable::WindSpeed,
            Universe::new(0.0, 100.0, 1.0).unwrap(),
            [
                (Term::Calm, MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap()),
                (Term::Light, MembershipFunction::triangular(8.0, 15.0, 25.0).unwrap()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn lookup_registered_term() {
        let v = wind();
        assert_eq!(v.fuzzify(Term::Light, 15.0).unwrap(), 1.0);
        assert!((v.fuzzify(Term::Calm, 7.5).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn unknown_term_is_reported() {
        let err = wind().term(Term::Excellent).unwrap_err();
        assert_eq!(
            err,
            FuzzyError::UnknownTerm {
                variable: Variable::WindSpeed,
                term: Term::Excellent
            }
        );
    }

    #[test]
    fn duplicate_term_is_rejected() {
        let mf = MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap();
        let err = LinguisticVariable::new(
            Variable::WindSpeed,
            Universe::new(0.0, 100.0, 1.0).unwrap(),
            [(Term::Calm, mf), (Term::Calm, mf)],
        )
        .unwrap_err();
        assert!(matches!(err, FuzzyError::DuplicateTerm { term: Term::Calm, .. }));
    }

    #[test]
    fn term_outside_universe_is_tolerated() {
        let v = LinguisticVariable::new(
            Variable::Visibility,
            Universe::new(0.0, 10.0, 0.1).unwrap(),
            [(Term::Excellent, MembershipFunction::triangular(8.5, 9.5, 12.0).unwrap())],
        )
        .unwrap();
        assert!(v.has_term(Term::Excellent));
        assert_eq!(v.fuzzify(Term::Excellent, 50.0).unwrap(), 0.0);
    }

    #[test]
    fn names_match_serde_representation() {
        for v in Variable::INPUTS {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
        }
        assert_eq!(serde_json::to_string(&Term::VeryHigh).unwrap(), "\"very_high\"");
    }
}
