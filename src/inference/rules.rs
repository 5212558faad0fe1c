//! # Regras de Risco de Voo — Dados Declarativos
//!
//! Definição embutida (versão [`RULESET_VERSION`]) das variáveis e das
//! duas bases de regras. São **dados**, não código estrutural: ajustar um
//! triângulo ou trocar o consequente de uma regra não mexe no motor.
//!
//! ## Variáveis
//!
//! | Variável | Universo | Termos |
//! |----------|----------|--------|
//! | `temperature` | [-20, 50] passo 1 | very_low, low, medium, high, very_high |
//! | `humidity` | [0, 100] passo 1 | very_low, low, medium, high, very_high |
//! | `wind_speed` | [0, 100] passo 1 | calm, light, moderate, strong, severe |
//! | `visibility` | [0, 10] passo 0.1 | very_low, low, medium, good, excellent |
//! | `risk` (saída) | [0, 100] passo 1 | very_low, low, medium, high, very_high |
//!
//! ## Decolagem vs. Pouso
//!
//! As duas bases compartilham as variáveis, mas o pouso é mais rígido:
//!
//! | Condição | Decolagem | Pouso |
//! |----------|-----------|-------|
//! | Temperatura extrema | medium | high |
//! | Vento forte | high | very_high |
//! | Visibilidade baixa | medium (com vento leve) | very_high |
//!
//! Essa mesma estrutura pode ser carregada de um JSON
//! ([`RuleBaseConfig`](crate::config::RuleBaseConfig)).

use std::collections::BTreeMap;

use super::{all, any, is, Rule};
use crate::core::{MembershipFunction, Result, Term, UniverseSpec, Variable, VariableSpec};

use crate::core::Term::{
    Calm, Excellent, Good, High, Light, Low, Medium, Moderate, Severe, Strong, VeryHigh, VeryLow,
};
use crate::core::Variable::{Humidity, Temperature, Visibility, WindSpeed};

/// Versão dos dados embutidos.
pub const RULESET_VERSION: &str = "v2";

/// Monta um [`VariableSpec`] a partir de uma tabela `termo → (a, b, c)`.
///
/// # Erros
///
/// [`FuzzyError::InvalidMembership`](crate::core::FuzzyError::InvalidMembership)
/// no primeiro triângulo mal ordenado ou não finito.
fn variable(
    variable: Variable,
    (min, max, step): (f64, f64, f64),
    terms: [(Term, [f64; 3]); 5],
) -> Result<VariableSpec> {
    let terms = terms
        .into_iter()
        .map(|(term, points)| MembershipFunction::try_from(points).map(|mf| (term, mf)))
        .collect::<Result<BTreeMap<_, _>>>()?;
    Ok(VariableSpec {
        variable,
        universe: UniverseSpec { min, max, step },
        terms,
    })
}

/// As quatro variáveis de entrada.
pub fn input_variables() -> Result<Vec<VariableSpec>> {
    Ok(vec![
        variable(
            Temperature,
            (-20.0, 50.0, 1.0),
            [
                (VeryLow, [-20.0, -10.0, 0.0]),
                (Low, [-5.0, 5.0, 15.0]),
                (Medium, [10.0, 20.0, 30.0]),
                (High, [25.0, 35.0, 42.0]),
                (VeryHigh, [38.0, 45.0, 50.0]),
            ],
        )?,
        variable(
            Humidity,
            (0.0, 100.0, 1.0),
            [
                (VeryLow, [0.0, 10.0, 25.0]),
                (Low, [15.0, 30.0, 45.0]),
                (Medium, [40.0, 55.0, 70.0]),
                (High, [65.0, 80.0, 90.0]),
                (VeryHigh, [85.0, 95.0, 100.0]),
            ],
        )?,
        variable(
            WindSpeed,
            (0.0, 100.0, 1.0),
            [
                (Calm, [0.0, 5.0, 10.0]),
                (Light, [8.0, 15.0, 25.0]),
                (Moderate, [20.0, 35.0, 50.0]),
                (Strong, [45.0, 60.0, 75.0]),
                (Severe, [70.0, 85.0, 100.0]),
            ],
        )?,
        variable(
            Visibility,
            (0.0, 10.0, 0.1),
            [
                (VeryLow, [0.0, 0.5, 1.5]),
                (Low, [1.0, 2.5, 4.0]),
                (Medium, [3.5, 5.5, 7.0]),
                (Good, [6.5, 8.0, 9.0]),
                (Excellent, [8.5, 9.5, 10.0]),
            ],
        )?,
    ])
}

/// Variável de saída `risk`, universo [0, 100] passo 1.
pub fn risk_variable() -> Result<VariableSpec> {
    variable(
        Variable::Risk,
        (0.0, 100.0, 1.0),
        [
            (VeryLow, [0.0, 10.0, 20.0]),
            (Low, [15.0, 30.0, 45.0]),
            (Medium, [40.0, 55.0, 70.0]),
            (High, [65.0, 80.0, 90.0]),
            (VeryHigh, [85.0, 95.0, 100.0]),
        ],
    )
}

/// Condições ideais: temperatura e umidade médias, vento calmo, visibilidade excelente.
fn ideal_calm() -> Rule {
    Rule::risk(
        all(
            is(Temperature, Medium),
            [is(Humidity, Medium), is(WindSpeed, Calm), is(Visibility, Excellent)],
        ),
        VeryLow,
    )
}

fn nominal_light_wind() -> Rule {
    Rule::risk(
        all(
            is(Temperature, Medium),
            [is(Humidity, Medium), is(WindSpeed, Light), is(Visibility, Good)],
        ),
        Low,
    )
}

/// Regras de decolagem.
pub fn takeoff_rules() -> Vec<Rule> {
    vec![
        ideal_calm(),
        nominal_light_wind(),
        Rule::risk(any(is(Temperature, VeryLow), [is(Temperature, VeryHigh)]), Medium),
        Rule::risk(is(WindSpeed, Moderate).or(is(WindSpeed, Strong)), High),
        Rule::risk(is(WindSpeed, Severe).or(is(Visibility, VeryLow)), VeryHigh),
        Rule::risk(is(Visibility, Low).and(is(WindSpeed, Light)), Medium),
        Rule::risk(
            is(Temperature, High)
                .and(is(Humidity, High))
                .and(is(WindSpeed, Moderate)),
            High,
        ),
        Rule::risk(
            is(Temperature, VeryHigh)
                .and(is(Humidity, VeryHigh))
                .and(is(WindSpeed, Severe)),
            VeryHigh,
        ),
    ]
}

/// Regras de pouso (mais rígidas).
pub fn landing_rules() -> Vec<Rule> {
    vec![
        ideal_calm(),
        nominal_light_wind(),
        Rule::risk(any(is(Temperature, VeryLow), [is(Temperature, VeryHigh)]), High),
        Rule::risk(is(WindSpeed, Moderate).and(is(Visibility, Medium)), High),
        Rule::risk(is(WindSpeed, Strong).or(is(WindSpeed, Severe)), VeryHigh),
        Rule::risk(is(Visibility, VeryLow).or(is(Visibility, Low)), VeryHigh),
        Rule::risk(
            is(Humidity, VeryHigh)
                .and(is(Temperature, High))
                .and(is(Visibility, Medium)),
            VeryHigh,
        ),
    ]
}
