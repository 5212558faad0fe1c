#![allow(dead_code, unused_imports)]
//! # Flight Risk — Análise Fuzzy de Risco de Voo
//!
//! **Ponto de entrada principal** da aplicação.
//!
//! Estima o risco de **decolagem** e de **pouso** (0–100) a partir de quatro
//! medições ambientais — temperatura, umidade, velocidade do vento e
//! visibilidade — usando inferência fuzzy Mamdani em vez de uma fórmula
//! fechada.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê AppConfig do ambiente
//!   ├── Carrega RuleBaseConfig (arquivo ou embutida)
//!   ├── Valida e constrói as bases de regras  ── erro? aborta aqui
//!   ├── Monta AppState e Router
//!   └── Inicia servidor TCP (FLIGHT_RISK_ADDR, padrão 0.0.0.0:5000)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados (inclui "nenhuma regra disparou")
//! RUST_LOG=debug cargo run
//!
//! # Regras customizadas
//! curl -s localhost:5000/api/rules > rules.json   # edite e reinicie com:
//! FLIGHT_RISK_RULES=rules.json cargo run
//! ```

/// Módulo `analyzer` — fachada `RiskAnalyzer` (decolagem + pouso).
mod analyzer;

/// Módulo `config` — `RuleBaseConfig` versionada e `AppConfig` do ambiente.
mod config;

/// Módulo `core` — primitivas fuzzy: Universe, MembershipFunction, LinguisticVariable.
mod core;

/// Módulo `inference` — motor Mamdani: antecedentes, regras, agregação, centróide.
mod inference;

/// Módulo `web` — servidor axum, handlers JSON e página Maud.
mod web;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::analyzer::Maneuver;
use crate::config::AppConfig;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("✈️ Flight Risk — Starting...");

    let app_config = AppConfig::from_env();
    let rules = app_config.load_rules()?;

    // Regras inválidas são erro de programação: falha aqui, antes de aceitar conexões.
    let state = AppState::new(rules).context("Configuração de regras inválida")?;
    tracing::info!(
        version = state.analyzer.version(),
        takeoff_rules = state.analyzer.rule_base(Maneuver::Takeoff).len(),
        landing_rules = state.analyzer.rule_base(Maneuver::Landing).len(),
        "Bases de regras prontas"
    );

    let app = web::create_router(state, &app_config.cors_origin)?;

    let listener = tokio::net::TcpListener::bind(&app_config.addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {}", app_config.addr))?;
    tracing::info!("🚀 Server running at http://{}", app_config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
