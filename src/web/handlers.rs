//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma rota
//! em [`super::create_router()`].
//!
//! | Handler | Método | Rota | Retorno |
//! |---------|--------|------|---------|
//! | `index` | GET | `/` | HTML completo (Maud) |
//! | `status` | GET | `/status` | JSON |
//! | `risk_analysis_default` | GET | `/api/risk-analysis` | JSON `RiskResult` |
//! | `risk_analysis` | POST | `/api/risk-analysis` | JSON `RiskResult` |
//! | `risk_analysis_batch` | POST | `/api/risk-analysis/batch` | JSON `[RiskResult]` |
//! | `rules` | GET | `/api/rules` | JSON `RuleBaseConfig` |
//!
//! ## Validação de Entrada
//!
//! O motor tolera qualquer valor (fora do universo o grau é 0), então a
//! validação das faixas fica aqui, na borda:
//!
//! | Campo | Faixa |
//! |-------|-------|
//! | `temperature` | [-20, 50] |
//! | `humidity` | [0, 100] |
//! | `wind_speed` | [0, 100] |
//! | `visibility` | [0, 10] |
//!
//! Campos ausentes assumem o valor padrão **individualmente** — um POST com
//! apenas `{"wind_speed": 60}` avalia 60 km/h com as demais condições padrão.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::state::AppState;
use super::templates;
use crate::analyzer::{Conditions, Maneuver, RiskResult};
use crate::config::RuleBaseConfig;

/// Máximo de tuplas aceitas em `/api/risk-analysis/batch`.
const MAX_BATCH: usize = 1000;

/// Erros devolvidos pela API como `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{field} = {value} fora da faixa [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("lote com {0} itens excede o limite de {max}", max = MAX_BATCH)]
    BatchTooLarge(usize),

    #[error("falha interna: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::OutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BatchTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Erro interno na API");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Condições enviadas pelo cliente; campos ausentes ou em branco usam o padrão.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct ConditionsPayload {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub visibility: Option<f64>,
}

/// Aceita número (JSON) ou texto (query string); texto vazio vira `None`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Number(f64),
        Text(String),
    }

    match Option::<Field>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Field::Number(x)) => Ok(Some(x)),
        Some(Field::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Field::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("número inválido: '{s}'"))),
    }
}

impl ConditionsPayload {
    /// Completa com os valores padrão e valida as faixas.
    pub fn resolve(self) -> Result<Conditions, ApiError> {
        let defaults = Conditions::default();
        Ok(Conditions {
            temperature: checked("temperature", self.temperature, defaults.temperature, -20.0, 50.0)?,
            humidity: checked("humidity", self.humidity, defaults.humidity, 0.0, 100.0)?,
            wind_speed: checked("wind_speed", self.wind_speed, defaults.wind_speed, 0.0, 100.0)?,
            visibility: checked("visibility", self.visibility, defaults.visibility, 0.0, 10.0)?,
        })
    }
}

fn checked(
    field: &'static str,
    value: Option<f64>,
    default: f64,
    min: f64,
    max: f64,
) -> Result<f64, ApiError> {
    let value = value.unwrap_or(default);
    // NaN falha nas duas comparações, então também é rejeitado aqui.
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(ApiError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Resposta do endpoint `/status`.
#[derive(Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub ruleset_version: String,
    pub takeoff_rules: usize,
    pub landing_rules: usize,
}

/// GET `/` — Página com formulário de condições e os dois scores.
///
/// Os campos do formulário chegam como query string; sem parâmetros a
/// página mostra a análise das condições padrão. Query inválida ou fora da
/// faixa também devolve a página, com a mensagem de erro.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<ConditionsPayload>, QueryRejection>,
) -> Html<String> {
    let resolved = match query {
        Ok(Query(payload)) => payload.resolve().map_err(|e| e.to_string()),
        Err(rejection) => Err(rejection.body_text()),
    };
    let markup = match resolved {
        Ok(conditions) => templates::full_page(&state.analyzer.assess(conditions), None),
        Err(message) => {
            let fallback = state.analyzer.assess(Conditions::default());
            templates::full_page(&fallback, Some(&message))
        }
    };
    Html(markup.into_string())
}

/// GET `/status` — Versão das regras e tamanho de cada base.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ready: true,
        ruleset_version: state.analyzer.version().to_string(),
        takeoff_rules: state.analyzer.rule_base(Maneuver::Takeoff).len(),
        landing_rules: state.analyzer.rule_base(Maneuver::Landing).len(),
    })
}

/// GET `/api/risk-analysis` — Análise das condições padrão.
pub async fn risk_analysis_default(State(state): State<AppState>) -> Json<RiskResult> {
    Json(state.analyzer.assess(Conditions::default()))
}

/// POST `/api/risk-analysis` — Análise das condições enviadas.
pub async fn risk_analysis(
    State(state): State<AppState>,
    Json(payload): Json<ConditionsPayload>,
) -> Result<Json<RiskResult>, ApiError> {
    let conditions = payload.resolve()?;
    let result = state.analyzer.assess(conditions);
    tracing::info!(
        takeoff = result.takeoff_risk,
        landing = result.landing_risk,
        ?conditions,
        "Análise de risco"
    );
    Ok(Json(result))
}

/// POST `/api/risk-analysis/batch` — Várias tuplas de uma vez.
///
/// A avaliação paralela (rayon) roda em `spawn_blocking` para não ocupar as
/// threads do executor Tokio.
pub async fn risk_analysis_batch(
    State(state): State<AppState>,
    Json(payloads): Json<Vec<ConditionsPayload>>,
) -> Result<Json<Vec<RiskResult>>, ApiError> {
    if payloads.len() > MAX_BATCH {
        return Err(ApiError::BatchTooLarge(payloads.len()));
    }
    let batch = payloads
        .into_iter()
        .map(ConditionsPayload::resolve)
        .collect::<Result<Vec<_>, _>>()?;

    let analyzer = state.analyzer.clone();
    let results = tokio::task::spawn_blocking(move || analyzer.calculate_batch(&batch))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(results))
}

/// GET `/api/rules` — Configuração de regras em uso, pronta para edição.
pub async fn rules(State(state): State<AppState>) -> Json<RuleBaseConfig> {
    Json(state.rules.as_ref().clone())
}
