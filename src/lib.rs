pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod listener;
pub mod metric;
pub mod services;
pub mod text;

pub use crate::config::{Config, ScoringWeights};
pub use crate::error::{ReflectError, RlResult};
pub use crate::listener::{flip_point_of_view, ReflectiveListener};
pub use crate::metric::{containment_measure, ParaMetric, ScoreBreakdown};
