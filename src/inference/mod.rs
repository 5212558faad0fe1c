//! # Módulo Inference — Motor de Inferência Fuzzy (Mamdani)
//!
//! Transforma uma tupla de medições crisp em um score crisp de risco:
//!
//! ```text
//! Inputs ──► [antecedent] fuzzificação + min/max ──► forças de disparo
//!        ──► [engine]     implicação (min) + agregação (max) ──► FuzzySet
//!        ──► [defuzzify]  centróide ──► f64
//! ```
//!
//! | Sub-módulo | Responsabilidade |
//! |------------|------------------|
//! | [`antecedent`] | Árvore de expressões `Leaf`/`And`/`Or` e [`Inputs`] |
//! | [`rule_base`] | [`Rule`], [`Consequent`], [`RuleBase`] validada |
//! | [`engine`] | [`InferenceEngine`] e [`FuzzySet`] |
//! | [`defuzzify`] | [`centroid`] |
//! | [`rules`] | Dados embutidos das bases de decolagem e pouso |

pub mod antecedent;
pub mod defuzzify;
pub mod engine;
pub mod rule_base;
pub mod rules;

pub use antecedent::{all, any, is, Antecedent, Inputs};
pub use defuzzify::centroid;
pub use engine::{FuzzySet, InferenceEngine};
pub use rule_base::{Consequent, Rule, RuleBase};
