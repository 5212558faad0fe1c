//! # Módulo Core — Primitivas Fuzzy
//!
//! Tipos fundamentais sobre os quais o motor de inferência é construído:
//!
//! - [`Universe`] — domínio discretizado usado na amostragem da saída
//! - [`MembershipFunction`] — função triangular `(a, b, c)` → grau em `[0, 1]`
//! - [`LinguisticVariable`] — variável com termos nomeados ([`Variable`], [`Term`])
//! - [`FuzzyError`] — taxonomia de erros do motor
//!
//! Tudo aqui é **imutável após construção**: as instâncias são montadas uma
//! vez no startup e compartilhadas por referência entre chamadas concorrentes.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{LinguisticVariable, MembershipFunction, Term, Universe, Variable};
//!
//! let wind = LinguisticVariable::new(
//!     Variable::WindSpeed,
//!     Universe::new(0.0, 100.0, 1.0)?,
//!     [(Term::Calm, MembershipFunction::triangular(0.0, 5.0, 10.0)?)],
//! )?;
//! assert_eq!(wind.fuzzify(Term::Calm, 5.0)?, 1.0);
//! ```

pub mod error;
pub mod membership;
pub mod universe;
pub mod variable;

pub use error::{FuzzyError, Result};
pub use membership::MembershipFunction;
pub use universe::{Universe, UniverseSpec};
pub use variable::{LinguisticVariable, Term, Variable, VariableSpec};
