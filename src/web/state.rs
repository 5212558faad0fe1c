//! # Estado da Aplicação Web
//!
//! Tudo que os handlers compartilham é **somente leitura**: o analisador e a
//! configuração que o originou são construídos antes do servidor subir e
//! nunca mais mudam. Não há locks — cada requisição cria seu próprio
//! contexto de avaliação.
//!
//! ```text
//! main()
//!   ├── RuleBaseConfig ──► Arc ─┐
//!   └── RiskAnalyzer   ──► Arc ─┴──► AppState (Clone, por handler)
//! ```

use std::sync::Arc;

use crate::analyzer::RiskAnalyzer;
use crate::config::RuleBaseConfig;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Analisador com as bases de decolagem e pouso já validadas.
    pub analyzer: Arc<RiskAnalyzer>,
    /// Configuração de regras em uso (exposta em `/api/rules`).
    pub rules: Arc<RuleBaseConfig>,
}

impl AppState {
    /// Valida a configuração e monta o estado.
    pub fn new(rules: RuleBaseConfig) -> Result<Self, crate::core::FuzzyError> {
        let analyzer = RiskAnalyzer::new(&rules)?;
        Ok(Self {
            analyzer: Arc::new(analyzer),
            rules: Arc::new(rules),
        })
    }
}
