//! # Módulo Web — Colaborador HTTP do Motor
//!
//! Camada fina sobre o [`RiskAnalyzer`](crate::analyzer::RiskAnalyzer),
//! construída com **Axum** + **Maud**. Não há sessão, autenticação nem
//! persistência: a camada valida as condições, chama o motor e serializa o
//! resultado.
//!
//! ## Rotas
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                                   │
//! │  ├── GET  /                        → página HTML (Maud)     │
//! │  ├── GET  /status                  → JSON: versão/regras    │
//! │  ├── GET  /api/risk-analysis       → JSON: condições padrão │
//! │  ├── POST /api/risk-analysis       → JSON: condições do body│
//! │  ├── POST /api/risk-analysis/batch → JSON: lote (rayon)     │
//! │  └── GET  /api/rules               → JSON: RuleBaseConfig   │
//! ├─────────────────────────────────────────────────────────────┤
//! │ CorsLayer (tower-http) — origem configurável                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum e validação das condições |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// # Erros
///
/// Retorna erro se `cors_origin` não for um valor de header válido.
pub fn create_router(state: AppState, cors_origin: &str) -> Result<Router> {
    Ok(Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── API JSON ──────────────────────────────────────────
        .route("/status", get(handlers::status))
        .route(
            "/api/risk-analysis",
            get(handlers::risk_analysis_default).post(handlers::risk_analysis),
        )
        .route("/api/risk-analysis/batch", post(handlers::risk_analysis_batch))
        .route("/api/rules", get(handlers::rules))
        .layer(cors_layer(cors_origin)?)
        .with_state(state))
}

/// CORS para o frontend: uma origem, com credenciais, GET/POST com JSON.
fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("Origem CORS inválida: {origin}"))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
