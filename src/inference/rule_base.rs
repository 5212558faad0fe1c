//! # Regras e Base de Regras
//!
//! Uma [`Rule`] liga um antecedente a um termo da variável de saída:
//!
//! ```text
//! SE wind_speed is strong OU wind_speed is severe ENTÃO risk is very_high
//!    └────────── Antecedent ──────────────────┘        └─ Consequent ─┘
//! ```
//!
//! A [`RuleBase`] agrupa as variáveis de entrada, a variável de saída e a
//! lista ordenada de regras. A ordem não afeta o resultado (a agregação por
//! máximo é comutativa), mas é preservada para logs e depuração.
//!
//! ## Validação na Construção
//!
//! [`RuleBase::new`] percorre cada folha de cada antecedente e cada
//! consequente **uma única vez**. Qualquer variável ou termo não registrado
//! derruba a construção com erro — no startup, nunca durante uma requisição.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::antecedent::find_variable;
use super::Antecedent;
use crate::core::{FuzzyError, LinguisticVariable, Result, Term, Variable};

/// Consequente de uma regra: `variável de saída is termo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consequent {
    pub variable: Variable,
    pub term: Term,
}

/// Regra fuzzy com peso implícito 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "if")]
    pub antecedent: Antecedent,
    #[serde(rename = "then")]
    pub consequent: Consequent,
}

impl Rule {
    pub fn new(antecedent: Antecedent, consequent: Consequent) -> Self {
        Self {
            antecedent,
            consequent,
        }
    }

    /// Regra cujo consequente é um termo da variável `risk`.
    pub fn risk(antecedent: Antecedent, term: Term) -> Self {
        Self::new(
            antecedent,
            Consequent {
                variable: Variable::Risk,
                term,
            },
        )
    }
}

/// Base de regras validada e imutável.
#[derive(Clone, Debug)]
pub struct RuleBase {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Monta e valida a base.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::EmptyRuleBase`] sem regras
    /// - [`FuzzyError::DuplicateVariable`] se uma entrada aparece duas vezes
    ///   (ou coincide com a saída)
    /// - [`FuzzyError::UnknownVariable`] se uma folha usa variável que não é entrada
    /// - [`FuzzyError::UnknownTerm`] se uma folha ou consequente usa termo não registrado
    /// - [`FuzzyError::OutputMismatch`] se o consequente aponta para outra variável
    pub fn new(
        inputs: Vec<LinguisticVariable>,
        output: LinguisticVariable,
        rules: Vec<Rule>,
    ) -> Result<Self> {
        if rules.is_empty() {
            return Err(FuzzyError::EmptyRuleBase);
        }

        let mut declared = HashSet::new();
        declared.insert(output.variable());
        for lv in &inputs {
            if !declared.insert(lv.variable()) {
                return Err(FuzzyError::DuplicateVariable(lv.variable()));
            }
        }

        for rule in &rules {
            rule.antecedent.try_for_each_leaf(&mut |variable, term| {
                find_variable(&inputs, variable)?.term(term).map(|_| ())
            })?;

            let Consequent { variable, term } = rule.consequent;
            if variable != output.variable() {
                return Err(FuzzyError::OutputMismatch {
                    expected: output.variable(),
                    found: variable,
                });
            }
            output.term(term)?;
        }

        Ok(Self {
            inputs,
            output,
            rules,
        })
    }

    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MembershipFunction, Universe};
    use crate::inference::is;

    fn tri(a: f64, b: f64, c: f64) -> MembershipFunction {
        MembershipFunction::triangular(a, b, c).unwrap()
    }

    fn wind() -> LinguisticVariable {
        LinguisticVariable::new(
            Variable::WindSpeed,
            Universe::new(0.0, 100.0, 1.0).unwrap(),
            [(Term::Calm, tri(0.0, 5.0, 10.0)), (Term::Severe, tri(70.0, 85.0, 100.0))],
        )
        .unwrap()
    }

    fn risk() -> LinguisticVariable {
        LinguisticVariable::new(
            Variable::Risk,
            Universe::new(0.0, 100.0, 1.0).unwrap(),
            [(Term::VeryLow, tri(0.0, 10.0, 20.0)), (Term::VeryHigh, tri(85.0, 95.0, 100.0))],
        )
        .unwrap()
    }

    #[test]
    fn valid_rule_base_is_built() {
        let rb = RuleBase::new(
            vec![wind()],
            risk(),
            vec![
                Rule::risk(is(Variable::WindSpeed, Term::Calm), Term::VeryLow),
                Rule::risk(is(Variable::WindSpeed, Term::Severe), Term::VeryHigh),
            ],
        )
        .unwrap();
        assert_eq!(rb.len(), 2);
        assert_eq!(rb.output().variable(), Variable::Risk);
    }

    #[test]
    fn unknown_antecedent_term_fails_fast() {
        let err = RuleBase::new(
            vec![wind()],
            risk(),
            vec![Rule::risk(is(Variable::WindSpeed, Term::Moderate), Term::VeryHigh)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            FuzzyError::UnknownTerm {
                variable: Variable::WindSpeed,
                term: Term::Moderate
            }
        );
    }

    #[test]
    fn unknown_consequent_term_fails_fast() {
        let err = RuleBase::new(
            vec![wind()],
            risk(),
            vec![Rule::risk(is(Variable::WindSpeed, Term::Calm), Term::Medium)],
        )
        .unwrap_err();
        assert!(matches!(err, FuzzyError::UnknownTerm { variable: Variable::Risk, .. }));
    }

    #[test]
    fn antecedent_on_undeclared_variable_fails_fast() {
        let err = RuleBase::new(
            vec![wind()],
            risk(),
            vec![Rule::risk(is(Variable::Visibility, Term::Good), Term::VeryLow)],
        )
        .unwrap_err();
        assert_eq!(err, FuzzyError::UnknownVariable(Variable::Visibility));
    }

    #[test]
    fn consequent_must_target_output() {
        let rule = Rule::new(
            is(Variable::WindSpeed, Term::Calm),
            Consequent {
                variable: Variable::WindSpeed,
                term: Term::Calm,
            },
        );
        let err = RuleBase::new(vec![wind()], risk(), vec![rule]).unwrap_err();
        assert_eq!(
            err,
            FuzzyError::OutputMismatch {
                expected: Variable::Risk,
                found: Variable::WindSpeed
            }
        );
    }

    #[test]
    fn duplicate_and_empty_are_rejected() {
        let rule = Rule::risk(is(Variable::WindSpeed, Term::Calm), Term::VeryLow);
        assert_eq!(
            RuleBase::new(vec![wind(), wind()], risk(), vec![rule]).unwrap_err(),
            FuzzyError::DuplicateVariable(Variable::WindSpeed)
        );
        assert_eq!(
            RuleBase::new(vec![wind()], risk(), vec![]).unwrap_err(),
            FuzzyError::EmptyRuleBase
        );
    }

    #[test]
    fn rule_json_uses_if_then_keys() {
        let rule = Rule::risk(is(Variable::WindSpeed, Term::Severe), Term::VeryHigh);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["then"]["term"], "very_high");
        assert_eq!(json["if"]["leaf"]["variable"], "wind_speed");
    }
}
