//! # Configuração — Bases de Regras e Ambiente
//!
//! Duas fontes de configuração, ambas lidas **uma vez** no startup:
//!
//! | Fonte | Tipo | Conteúdo |
//! |-------|------|----------|
//! | Variáveis de ambiente | [`AppConfig`] | Endereço do servidor, origem CORS, caminho das regras |
//! | JSON opcional | [`RuleBaseConfig`] | Variáveis linguísticas + regras de decolagem e pouso |
//!
//! ## Variáveis de Ambiente
//!
//! | Variável | Padrão |
//! |----------|--------|
//! | `FLIGHT_RISK_ADDR` | `0.0.0.0:5000` |
//! | `FLIGHT_RISK_CORS_ORIGIN` | `http://localhost:5173` |
//! | `FLIGHT_RISK_RULES` | *(ausente → regras embutidas)* |
//!
//! ## Formato do JSON de Regras
//!
//! É a serialização direta de [`RuleBaseConfig`]. Para gerar um ponto de
//! partida editável, basta consultar `GET /api/rules` no servidor rodando.
//!
//! ```text
//! {
//!   "version": "v2",
//!   "inputs":  [{ "variable": "wind_speed", "universe": {...}, "terms": { "calm": [0, 5, 10], ... } }, ...],
//!   "output":  { "variable": "risk", ... },
//!   "takeoff": [{ "if": { "or": { "left": {...}, "right": {...} } }, "then": { "variable": "risk", "term": "high" } }, ...],
//!   "landing": [...]
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{FuzzyError, VariableSpec};
use crate::inference::{rules, Rule, RuleBase};

const DEFAULT_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Configuração declarativa e versionada das duas bases de regras.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleBaseConfig {
    pub version: String,
    pub inputs: Vec<VariableSpec>,
    pub output: VariableSpec,
    pub takeoff: Vec<Rule>,
    pub landing: Vec<Rule>,
}

impl RuleBaseConfig {
    /// Regras embutidas no binário.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::InvalidMembership`] se algum triângulo embutido for inválido.
    pub fn builtin() -> std::result::Result<Self, FuzzyError> {
        Ok(Self {
            version: rules::RULESET_VERSION.to_string(),
            inputs: rules::input_variables()?,
            output: rules::risk_variable()?,
            takeoff: rules::takeoff_rules(),
            landing: rules::landing_rules(),
        })
    }

    /// Carrega regras de um arquivo JSON.
    ///
    /// # Erros
    ///
    /// Retorna erro se o arquivo não puder ser lido ou não for um
    /// `RuleBaseConfig` válido (inclusive triângulos mal ordenados).
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Falha ao ler {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
        Ok(config)
    }

    /// Constrói a base de decolagem.
    pub fn takeoff_rule_base(&self) -> std::result::Result<RuleBase, FuzzyError> {
        self.rule_base(&self.takeoff)
    }

    /// Constrói a base de pouso.
    pub fn landing_rule_base(&self) -> std::result::Result<RuleBase, FuzzyError> {
        self.rule_base(&self.landing)
    }

    fn rule_base(&self, rules: &[Rule]) -> std::result::Result<RuleBase, FuzzyError> {
        let inputs = self
            .inputs
            .iter()
            .map(VariableSpec::build)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        RuleBase::new(inputs, self.output.build()?, rules.to_vec())
    }
}

/// Configuração do processo, lida de variáveis de ambiente.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub addr: String,
    pub cors_origin: String,
    pub rules_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            addr: non_empty("FLIGHT_RISK_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            cors_origin: non_empty("FLIGHT_RISK_CORS_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            rules_path: non_empty("FLIGHT_RISK_RULES").map(PathBuf::from),
        }
    }

    /// Regras do arquivo configurado, ou as embutidas.
    pub fn load_rules(&self) -> Result<RuleBaseConfig> {
        match &self.rules_path {
            Some(path) => {
                let config = RuleBaseConfig::load(path)?;
                tracing::info!(path = %path.display(), version = %config.version, "Regras carregadas do disco");
                Ok(config)
            }
            None => {
                tracing::info!(version = rules::RULESET_VERSION, "Usando regras embutidas");
                RuleBaseConfig::builtin().context("Regras embutidas inválidas")
            }
        }
    }
}
