//! # Templates Maud — HTML Server-Side Rendering
//!
//! Página única de análise de risco, renderizada com o macro
//! [`maud`](https://maud.lambda.xyz/). Sem JavaScript: o formulário envia as
//! condições por query string (`GET /?temperature=...`) e o servidor devolve
//! a página já com os scores.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────── nav-bar ────────────────────┐
//! │ FR │ Análise de Risco de Voo      regras    │
//! ├──────────────────────┬──────────────────────┤
//! │ Condições            │ Decolagem   30.00    │
//! │  temperatura [25  ]  │  ████░░░░░░  Baixo   │
//! │  umidade     [50  ]  │ Pouso       30.00    │
//! │  vento       [15  ]  │  ████░░░░░░  Baixo   │
//! │  visibilidade[8   ]  │                      │
//! │  [Analisar]          │                      │
//! └──────────────────────┴──────────────────────┘
//! ```

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::analyzer::{Conditions, RiskLevel, RiskResult};

/// CSS embutido — a página não depende de assets externos.
const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #0f172a; color: #e2e8f0; }
.nav-bar { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; background: #1e293b; }
.nav-brand-icon { background: #38bdf8; color: #0f172a; font-weight: 700; padding: 0.2rem 0.5rem; border-radius: 4px; margin-right: 0.5rem; }
.nav-version { font-size: 0.8rem; color: #94a3b8; }
.app-container { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; padding: 1.5rem; max-width: 960px; margin: 0 auto; }
.panel { background: #1e293b; border-radius: 8px; padding: 1.25rem; }
.field { display: flex; justify-content: space-between; margin-bottom: 0.75rem; }
.field input { width: 7rem; }
.error { background: #7f1d1d; padding: 0.75rem; border-radius: 6px; margin-bottom: 1rem; }
.risk-card { margin-bottom: 1.25rem; }
.risk-score { font-size: 2rem; font-weight: 700; }
.risk-bar { height: 0.6rem; background: #334155; border-radius: 4px; overflow: hidden; }
.risk-bar-fill { height: 100%; }
.risk-very-low .risk-bar-fill { background: #22c55e; }
.risk-low .risk-bar-fill { background: #84cc16; }
.risk-medium .risk-bar-fill { background: #eab308; }
.risk-high .risk-bar-fill { background: #f97316; }
.risk-very-high .risk-bar-fill { background: #ef4444; }
"#;

/// Página completa com formulário e resultado.
///
/// `error`, quando presente, é a mensagem de validação das condições
/// enviadas; nesse caso `result` traz a análise das condições padrão.
pub fn full_page(result: &RiskResult, error: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Análise de Risco de Voo" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav class="nav-bar" {
                    div {
                        span class="nav-brand-icon" { "FR" }
                        span { "Análise de Risco de Voo" }
                    }
                    a href="/api/rules" class="nav-version" { "regras" }
                }
                div class="app-container" {
                    div class="panel" {
                        h2 { "Condições" }
                        @if let Some(message) = error {
                            div class="error" { (message) }
                        }
                        (conditions_form(&result.conditions))
                    }
                    div class="panel" {
                        h2 { "Risco" }
                        (risk_card("Decolagem", result.takeoff_risk))
                        (risk_card("Pouso", result.landing_risk))
                    }
                }
            }
        }
    }
}

fn conditions_form(c: &Conditions) -> Markup {
    html! {
        form method="get" action="/" {
            (number_field("temperature", "Temperatura (°C)", c.temperature, -20.0, 50.0, "0.1"))
            (number_field("humidity", "Umidade (%)", c.humidity, 0.0, 100.0, "1"))
            (number_field("wind_speed", "Vento (km/h)", c.wind_speed, 0.0, 100.0, "1"))
            (number_field("visibility", "Visibilidade (km)", c.visibility, 0.0, 10.0, "0.1"))
            button type="submit" { "Analisar" }
        }
    }
}

fn number_field(name: &str, label: &str, value: f64, min: f64, max: f64, step: &str) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="number" id=(name) name=(name) value=(value) min=(min) max=(max) step=(step);
        }
    }
}

/// Card de um score com barra proporcional e faixa qualitativa.
fn risk_card(title: &str, score: f64) -> Markup {
    let level = RiskLevel::from_score(score);
    html! {
        div class=(format!("risk-card {}", level.css_class())) {
            div { (title) }
            div class="risk-score" { (format!("{:.2}", score)) }
            div class="risk-bar" {
                div class="risk-bar-fill" style=(format!("width: {:.0}%", score.clamp(0.0, 100.0))) {}
            }
            div class="risk-level" { (level.label()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_shows_score_and_level() {
        let html = risk_card("Pouso", 93.33).into_string();
        assert!(html.contains("93.33"));
        assert!(html.contains("Muito alto"));
        assert!(html.contains("risk-very-high"));
    }

    #[test]
    fn page_echoes_conditions_in_form() {
        let result = RiskResult {
            takeoff_risk: 30.0,
            landing_risk: 30.0,
            conditions: Conditions::default(),
        };
        let html = full_page(&result, None).into_string();
        assert!(html.contains(r#"name="wind_speed" value="15""#));
        assert!(!html.contains(r#"class="error""#));
    }
}
