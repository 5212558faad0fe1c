//! # Antecedentes — Fuzzificação + Lógica
//!
//! O antecedente de uma regra é uma árvore de expressões sobre termos
//! linguísticos. Avaliá-la contra uma tupla de entradas produz a
//! **força de disparo** (firing strength) da regra, sempre em `[0, 1]`.
//!
//! | Nó | Avaliação |
//! |----|-----------|
//! | `Leaf { variable, term }` | `μ_term(inputs[variable])` |
//! | `And { left, right }` | `min(left, right)` — t-norma de Zadeh |
//! | `Or { left, right }` | `max(left, right)` — t-conorma de Zadeh |
//!
//! ## Exemplo
//!
//! ```text
//! temperature is medium AND wind_speed is light
//!
//!            And
//!           ╱   ╲
//!   Leaf(temp,    Leaf(wind,
//!        medium)       light)
//!     = 0.5          = 1.0
//!
//! firing strength = min(0.5, 1.0) = 0.5
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{FuzzyError, LinguisticVariable, Result, Term, Variable};

/// Tupla de entradas crisp de uma chamada: variável → valor.
///
/// Criada por chamada e descartada ao final; nunca compartilhada entre
/// chamadas concorrentes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inputs(HashMap<Variable, f64>);

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, variable: Variable, value: f64) -> Self {
        self.0.insert(variable, value);
        self
    }

    /// Valor crisp da variável.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::MissingInput`] se a variável não foi informada.
    pub fn get(&self, variable: Variable) -> Result<f64> {
        self.0
            .get(&variable)
            .copied()
            .ok_or(FuzzyError::MissingInput(variable))
    }
}

impl FromIterator<(Variable, f64)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (Variable, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Nó da árvore de antecedentes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Antecedent {
    Leaf { variable: Variable, term: Term },
    And { left: Box<Antecedent>, right: Box<Antecedent> },
    Or { left: Box<Antecedent>, right: Box<Antecedent> },
}

/// Atalho para `Antecedent::Leaf` — lê como "variável **é** termo".
pub fn is(variable: Variable, term: Term) -> Antecedent {
    Antecedent::Leaf { variable, term }
}

/// Conjunção de vários antecedentes, associada à esquerda.
///
/// `all(a, [b, c])` ≡ `a.and(b).and(c)`.
pub fn all(first: Antecedent, rest: impl IntoIterator<Item = Antecedent>) -> Antecedent {
    rest.into_iter().fold(first, Antecedent::and)
}

/// Disjunção de vários antecedentes, associada à esquerda.
pub fn any(first: Antecedent, rest: impl IntoIterator<Item = Antecedent>) -> Antecedent {
    rest.into_iter().fold(first, Antecedent::or)
}

impl Antecedent {
    pub fn and(self, other: Antecedent) -> Antecedent {
        Antecedent::And {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    pub fn or(self, other: Antecedent) -> Antecedent {
        Antecedent::Or {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Força de disparo do antecedente para as entradas.
    ///
    /// Cada folha avalia a função de pertinência diretamente sobre o valor
    /// contínuo — não há discretização prévia das entradas.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::MissingInput`] se falta valor para uma variável usada
    /// - [`FuzzyError::UnknownVariable`] / [`FuzzyError::UnknownTerm`] se a
    ///   folha referencia algo não registrado (a [`RuleBase`](super::RuleBase)
    ///   rejeita esses casos na construção)
    pub fn evaluate(&self, variables: &[LinguisticVariable], inputs: &Inputs) -> Result<f64> {
        match self {
            Antecedent::Leaf { variable, term } => {
                let lv = find_variable(variables, *variable)?;
                let x = inputs.get(*variable)?;
                lv.fuzzify(*term, x)
            }
            Antecedent::And { left, right } => {
                let l = left.evaluate(variables, inputs)?;
                let r = right.evaluate(variables, inputs)?;
                Ok(l.min(r))
            }
            Antecedent::Or { left, right } => {
                let l = left.evaluate(variables, inputs)?;
                let r = right.evaluate(variables, inputs)?;
                Ok(l.max(r))
            }
        }
    }

    /// Visita todas as folhas `(variável, termo)` da árvore, da esquerda
    /// para a direita, parando no primeiro erro.
    pub fn try_for_each_leaf<F>(&self, f: &mut F) -> Result<()>
    where
        F: FnMut(Variable, Term) -> Result<()>,
    {
        match self {
            Antecedent::Leaf { variable, term } => f(*variable, *term),
            Antecedent::And { left, right } | Antecedent::Or { left, right } => {
                left.try_for_each_leaf(f)?;
                right.try_for_each_leaf(f)
            }
        }
    }
}

/// Procura a variável linguística de entrada pelo identificador.
pub(crate) fn find_variable(
    variables: &[LinguisticVariable],
    variable: Variable,
) -> Result<&LinguisticVariable> {
    variables
        .iter()
        .find(|lv| lv.variable() == variable)
        .ok_or(FuzzyError::UnknownVariable(variable))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MembershipFunction, Universe};

    fn variables() -> Vec<LinguisticVariable> {
        let tri = |a, b, c| MembershipFunction::triangular(a, b, c).unwrap();
        vec![
            LinguisticVariable::new(
                Variable::Temperature,
                Universe::new(-20.0, 50.0, 1.0).unwrap(),
                [(Term::Medium, tri(10.0, 20.0, 30.0)), (Term::High, tri(25.0, 35.0, 42.0))],
            )
            .unwrap(),
            LinguisticVariable::new(
                Variable::WindSpeed,
                Universe::new(0.0, 100.0, 1.0).unwrap(),
                [(Term::Light, tri(8.0, 15.0, 25.0)), (Term::Severe, tri(70.0, 85.0, 100.0))],
            )
            .unwrap(),
        ]
    }

    fn inputs(temperature: f64, wind: f64) -> Inputs {
        Inputs::new()
            .with(Variable::Temperature, temperature)
            .with(Variable::WindSpeed, wind)
    }

    #[test]
    fn leaf_fuzzifies_continuous_value() {
        let vars = variables();
        let leaf = is(Variable::Temperature, Term::Medium);
        let d = leaf.evaluate(&vars, &inputs(25.0, 0.0)).unwrap();
        assert!((d - 0.5).abs() < 1e-12);
        let d = leaf.evaluate(&vars, &inputs(20.5, 0.0)).unwrap();
        assert!((d - 0.95).abs() < 1e-12);
    }

    #[test]
    fn and_is_minimum_or_is_maximum() {
        let vars = variables();
        let input = inputs(25.0, 12.0);
        let a = is(Variable::Temperature, Term::Medium);
        let b = is(Variable::WindSpeed, Term::Light);
        let da = a.evaluate(&vars, &input).unwrap();
        let db = b.evaluate(&vars, &input).unwrap();

        let and = a.clone().and(b.clone()).evaluate(&vars, &input).unwrap();
        let or = a.or(b).evaluate(&vars, &input).unwrap();
        assert_eq!(and, da.min(db));
        assert_eq!(or, da.max(db));
    }

    #[test]
    fn firing_strength_stays_in_unit_interval() {
        let vars = variables();
        let expr = is(Variable::Temperature, Term::Medium)
            .and(is(Variable::WindSpeed, Term::Light))
            .or(is(Variable::Temperature, Term::High).and(is(Variable::WindSpeed, Term::Severe)));
        for t in (-40..=80).step_by(3) {
            for w in (-10..=120).step_by(7) {
                let d = expr.evaluate(&vars, &inputs(t as f64, w as f64)).unwrap();
                assert!((0.0..=1.0).contains(&d), "t={t} w={w} d={d}");
            }
        }
    }

    #[test]
    fn missing_input_is_reported() {
        let vars = variables();
        let only_temp = Inputs::new().with(Variable::Temperature, 20.0);
        let err = is(Variable::WindSpeed, Term::Light)
            .evaluate(&vars, &only_temp)
            .unwrap_err();
        assert_eq!(err, FuzzyError::MissingInput(Variable::WindSpeed));
    }

    #[test]
    fn unregistered_variable_is_reported() {
        let vars = variables();
        let err = is(Variable::Visibility, Term::Good)
            .evaluate(&vars, &inputs(20.0, 10.0).with(Variable::Visibility, 8.0))
            .unwrap_err();
        assert_eq!(err, FuzzyError::UnknownVariable(Variable::Visibility));
    }

    #[test]
    fn leaves_are_visited_left_to_right() {
        let expr = is(Variable::Temperature, Term::Medium)
            .and(is(Variable::WindSpeed, Term::Light).or(is(Variable::WindSpeed, Term::Severe)));
        let mut seen = Vec::new();
        expr.try_for_each_leaf(&mut |v, t| {
            seen.push((v, t));
            Ok(())
        })
        .unwrap();
        assert_eq!(
            seen,
            vec![
                (Variable::Temperature, Term::Medium),
                (Variable::WindSpeed, Term::Light),
                (Variable::WindSpeed, Term::Severe),
            ]
        );
    }

    #[test]
    fn all_and_any_fold_left() {
        let a = is(Variable::Temperature, Term::Medium);
        let b = is(Variable::WindSpeed, Term::Light);
        let c = is(Variable::WindSpeed, Term::Severe);
        assert_eq!(
            all(a.clone(), [b.clone(), c.clone()]),
            a.clone().and(b.clone()).and(c.clone())
        );
        assert_eq!(any(a.clone(), [b.clone(), c.clone()]), a.clone().or(b).or(c));
        assert_eq!(all(a.clone(), []), a);
    }

    #[test]
    fn json_form_round_trips() {
        let expr = is(Variable::WindSpeed, Term::Strong).or(is(Variable::WindSpeed, Term::Severe));
        let json = serde_json::to_string(&expr).unwrap();
        assert!(json.contains("\"or\""));
        assert!(json.contains("\"wind_speed\""));
        let back: Antecedent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }
}
