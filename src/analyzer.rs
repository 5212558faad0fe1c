//! # Analisador de Risco de Voo
//!
//! Fachada sobre o motor fuzzy. Mantém duas [`RuleBase`]s — **decolagem** e
//! **pouso** — construídas sobre as mesmas quatro entradas e a mesma saída
//! `risk`, e expõe uma única operação: [`RiskAnalyzer::calculate_risks`].
//!
//! ## Fluxo de uma Chamada
//!
//! ```text
//! calculate_risks(temperature, humidity, wind_speed, visibility)
//!   ├── monta Inputs (contexto da chamada)
//!   ├── takeoff: infer → centroid → round2   (falha → 50.0)
//!   ├── landing: infer → centroid → round2   (falha → 50.0)
//!   └── RiskResult { takeoff_risk, landing_risk, conditions }
//! ```
//!
//! ## Política de Falha
//!
//! A operação **nunca falha**. Qualquer erro interno vira o score padrão
//! [`DEFAULT_RISK`], mas os casos não são confundidos nos logs:
//!
//! | Erro | Log | Significado |
//! |------|-----|-------------|
//! | `NoMatchingRule` | `debug` | Entrada fora da cobertura das regras (esperado) |
//! | demais | `warn` | Defeito de configuração ou anomalia numérica |
//!
//! ## Concorrência
//!
//! O analisador é `Send + Sync` e só é lido após a construção; pode ser
//! compartilhado via `Arc` entre quantas threads forem necessárias.
//! [`RiskAnalyzer::calculate_batch`] usa rayon para avaliar várias tuplas em
//! paralelo.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RuleBaseConfig;
use crate::core::{FuzzyError, Variable};
use crate::inference::{centroid, InferenceEngine, Inputs, RuleBase};

/// Score usado quando a inferência não produz um valor.
pub const DEFAULT_RISK: f64 = 50.0;

/// Tupla de medições ambientais.
///
/// Faixas convencionais (validadas pela camada web, não pelo motor):
/// temperatura [-20, 50] °C, umidade [0, 100] %, vento [0, 100] km/h,
/// visibilidade [0, 10] km.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub visibility: f64,
}

impl Default for Conditions {
    /// Condições padrão quando o chamador não informa nenhuma.
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 50.0,
            wind_speed: 15.0,
            visibility: 8.0,
        }
    }
}

impl Conditions {
    /// Contexto de entradas desta tupla para o motor.
    pub fn inputs(&self) -> Inputs {
        Variable::INPUTS
            .into_iter()
            .zip([self.temperature, self.humidity, self.wind_speed, self.visibility])
            .collect()
    }
}

/// Resultado da análise: scores em [0, 100] com 2 casas decimais e eco das entradas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub takeoff_risk: f64,
    pub landing_risk: f64,
    pub conditions: Conditions,
}

/// Manobra avaliada.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Maneuver {
    Takeoff,
    Landing,
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maneuver::Takeoff => f.write_str("takeoff"),
            Maneuver::Landing => f.write_str("landing"),
        }
    }
}

/// Faixa qualitativa de um score, usada apenas na apresentação.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 20.0 => RiskLevel::VeryLow,
            s if s < 35.0 => RiskLevel::Low,
            s if s < 60.0 => RiskLevel::Medium,
            s if s < 80.0 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Muito baixo",
            RiskLevel::Low => "Baixo",
            RiskLevel::Medium => "Moderado",
            RiskLevel::High => "Alto",
            RiskLevel::VeryHigh => "Muito alto",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "risk-very-low",
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
            RiskLevel::VeryHigh => "risk-very-high",
        }
    }
}

/// Arredonda para 2 casas decimais; empates exatos vão para o par (`0.125 → 0.12`).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Analisador com as bases de decolagem e pouso, imutável após construção.
#[derive(Debug)]
pub struct RiskAnalyzer {
    version: String,
    takeoff: RuleBase,
    landing: RuleBase,
}

impl RiskAnalyzer {
    /// Constrói e valida as duas bases.
    ///
    /// # Erros
    ///
    /// Qualquer [`FuzzyError`] de configuração — o chamador deve abortar o startup.
    pub fn new(config: &RuleBaseConfig) -> Result<Self, FuzzyError> {
        let takeoff = config.takeoff_rule_base()?;
        let landing = config.landing_rule_base()?;
        tracing::debug!(
            version = %config.version,
            takeoff_rules = takeoff.len(),
            landing_rules = landing.len(),
            "Bases de regras validadas"
        );
        Ok(Self {
            version: config.version.clone(),
            takeoff,
            landing,
        })
    }

    /// Analisador com as regras embutidas.
    pub fn builtin() -> Result<Self, FuzzyError> {
        Self::new(&RuleBaseConfig::builtin()?)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rule_base(&self, maneuver: Maneuver) -> &RuleBase {
        match maneuver {
            Maneuver::Takeoff => &self.takeoff,
            Maneuver::Landing => &self.landing,
        }
    }

    /// Calcula os riscos de decolagem e pouso. Nunca falha.
    pub fn calculate_risks(
        &self,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        visibility: f64,
    ) -> RiskResult {
        self.assess(Conditions {
            temperature,
            humidity,
            wind_speed,
            visibility,
        })
    }

    /// Mesma operação de [`calculate_risks`](Self::calculate_risks), recebendo a tupla pronta.
    pub fn assess(&self, conditions: Conditions) -> RiskResult {
        let inputs = conditions.inputs();
        RiskResult {
            takeoff_risk: self.score(Maneuver::Takeoff, &inputs),
            landing_risk: self.score(Maneuver::Landing, &inputs),
            conditions,
        }
    }

    /// Avalia várias tuplas em paralelo, preservando a ordem de entrada.
    pub fn calculate_batch(&self, batch: &[Conditions]) -> Vec<RiskResult> {
        batch.par_iter().map(|c| self.assess(*c)).collect()
    }

    /// Score bruto (sem arredondamento nem substituição) de uma manobra.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::NoMatchingRule`] se nenhuma regra disparou
    /// - [`FuzzyError::NonFiniteOutput`] se o centróide não for finito
    /// - [`FuzzyError::MissingInput`] se `inputs` não tiver todas as variáveis usadas
    pub fn evaluate(&self, maneuver: Maneuver, inputs: &Inputs) -> Result<f64, FuzzyError> {
        let aggregate = InferenceEngine::infer(self.rule_base(maneuver), inputs)?;
        centroid(&aggregate)
    }

    fn score(&self, maneuver: Maneuver, inputs: &Inputs) -> f64 {
        match self.evaluate(maneuver, inputs) {
            Ok(value) => round2(value),
            Err(e) if e.is_no_match() => {
                tracing::debug!(%maneuver, ?inputs, "Nenhuma regra disparou, usando risco padrão");
                DEFAULT_RISK
            }
            Err(e) => {
                tracing::warn!(%maneuver, error = %e, ?inputs, "Falha na inferência, usando risco padrão");
                DEFAULT_RISK
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variable;

    fn analyzer() -> RiskAnalyzer {
        RiskAnalyzer::builtin().unwrap()
    }

    fn assert_valid(score: f64) {
        assert!(score.is_finite() && (0.0..=100.0).contains(&score), "score {score}");
    }

    #[test]
    fn ideal_conditions_are_low_risk() {
        let r = analyzer().calculate_risks(25.0, 50.0, 15.0, 8.0);
        assert_valid(r.takeoff_risk);
        assert_valid(r.landing_risk);
        assert!(r.takeoff_risk < 35.0, "takeoff {}", r.takeoff_risk);
        assert!(r.landing_risk < 35.0, "landing {}", r.landing_risk);
        // Só a regra "low" dispara (força 0.5): centróide do triângulo simétrico.
        assert_eq!(r.takeoff_risk, 30.0);
    }

    #[test]
    fn severe_wind_is_high_risk() {
        let r = analyzer().calculate_risks(25.0, 50.0, 95.0, 8.0);
        assert!(r.takeoff_risk >= 80.0, "takeoff {}", r.takeoff_risk);
        assert!(r.landing_risk >= 80.0, "landing {}", r.landing_risk);
    }

    #[test]
    fn very_low_visibility_is_worse_for_landing() {
        let r = analyzer().calculate_risks(25.0, 50.0, 15.0, 0.3);
        assert!(r.landing_risk >= r.takeoff_risk);
        assert!(r.takeoff_risk >= 60.0, "takeoff {}", r.takeoff_risk);
        assert!(r.landing_risk >= 60.0, "landing {}", r.landing_risk);
    }

    #[test]
    fn moderate_wind_with_medium_visibility_is_high_risk() {
        let r = analyzer().calculate_risks(25.0, 50.0, 35.0, 5.5);
        assert!(r.landing_risk >= r.takeoff_risk);
        assert!(r.takeoff_risk >= 65.0, "takeoff {}", r.takeoff_risk);
        assert!(r.landing_risk < 90.0, "landing {}", r.landing_risk);
    }

    #[test]
    fn universe_extremes_never_fail() {
        let a = analyzer();
        let base = Conditions::default();
        let extremes = [
            Conditions { temperature: -20.0, ..base },
            Conditions { temperature: 50.0, ..base },
            Conditions { humidity: 0.0, ..base },
            Conditions { humidity: 100.0, ..base },
            Conditions { wind_speed: 0.0, ..base },
            Conditions { wind_speed: 100.0, ..base },
            Conditions { visibility: 0.0, ..base },
            Conditions { visibility: 10.0, ..base },
            Conditions { temperature: -20.0, humidity: 0.0, wind_speed: 0.0, visibility: 0.0 },
            Conditions { temperature: 50.0, humidity: 100.0, wind_speed: 100.0, visibility: 10.0 },
        ];
        for c in extremes {
            let r = a.assess(c);
            assert_valid(r.takeoff_risk);
            assert_valid(r.landing_risk);
            assert_eq!(r.conditions, c);
        }
    }

    #[test]
    fn no_rule_fired_falls_back_to_default() {
        let a = analyzer();
        let c = Conditions { temperature: -20.0, ..Conditions::default() };
        assert_eq!(
            a.evaluate(Maneuver::Takeoff, &c.inputs()).unwrap_err(),
            FuzzyError::NoMatchingRule
        );
        let r = a.assess(c);
        assert_eq!(r.takeoff_risk, DEFAULT_RISK);
        assert_eq!(r.landing_risk, DEFAULT_RISK);
    }

    #[test]
    fn non_finite_inputs_fall_back_to_default() {
        let a = analyzer();
        let r = a.calculate_risks(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
        assert_eq!(r.takeoff_risk, DEFAULT_RISK);
        assert_eq!(r.landing_risk, DEFAULT_RISK);
    }

    #[test]
    fn missing_input_is_distinguishable_from_no_match() {
        let a = analyzer();
        let partial = Inputs::new()
            .with(Variable::Temperature, 25.0)
            .with(Variable::Humidity, 50.0)
            .with(Variable::WindSpeed, 15.0);
        let err = a.evaluate(Maneuver::Landing, &partial).unwrap_err();
        assert_eq!(err, FuzzyError::MissingInput(Variable::Visibility));
        assert!(!err.is_no_match());
    }

    #[test]
    fn permuted_rules_give_same_scores() {
        let mut config = RuleBaseConfig::builtin().unwrap();
        let original = RiskAnalyzer::new(&config).unwrap();
        config.takeoff.reverse();
        config.landing.rotate_left(3);
        let permuted = RiskAnalyzer::new(&config).unwrap();

        for c in [
            Conditions::default(),
            Conditions { wind_speed: 48.0, visibility: 3.8, ..Conditions::default() },
            Conditions { temperature: 40.0, humidity: 90.0, wind_speed: 80.0, visibility: 5.0 },
            Conditions { temperature: -12.0, humidity: 20.0, wind_speed: 9.0, visibility: 1.2 },
        ] {
            assert_eq!(original.assess(c), permuted.assess(c));
        }
    }

    #[test]
    fn rounding_is_stable() {
        for x in [0.0, 1.005, 12.3456, 29.999, 33.335, 93.3333, 99.999, 100.0] {
            let once = round2(x);
            assert_eq!(round2(once), once, "x = {x}");
        }
        assert_eq!(round2(93.33333), 93.33);
    }

    #[test]
    fn rounding_ties_go_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(92.875), 92.88);
        assert_eq!(round2(30.125), 30.12);
    }

    #[test]
    fn batch_preserves_order() {
        let a = analyzer();
        let batch: Vec<Conditions> = (0..=20)
            .map(|i| Conditions { wind_speed: i as f64 * 5.0, ..Conditions::default() })
            .collect();
        let results = a.calculate_batch(&batch);
        assert_eq!(results.len(), batch.len());
        for (c, r) in batch.iter().zip(&results) {
            assert_eq!(r.conditions, *c);
            assert_eq!(*r, a.assess(*c));
        }
    }

    #[test]
    fn shared_across_threads() {
        let a = std::sync::Arc::new(analyzer());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let a = a.clone();
                std::thread::spawn(move || a.calculate_risks(25.0, 50.0, 20.0 * i as f64, 8.0))
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let r = h.join().unwrap();
            assert_eq!(r, a.calculate_risks(25.0, 50.0, 20.0 * i as f64, 8.0));
        }
    }

    #[test]
    fn risk_level_bands() {
        assert_eq!(RiskLevel::from_score(10.0), RiskLevel::VeryLow);
        assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(50.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(79.99), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(80.0), RiskLevel::VeryHigh);
    }
}
