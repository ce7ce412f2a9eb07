// src/lib.rs

// dominoes ‑ cascade-distance core
// For every position in a line of dominoes: how far the chain reaction
// reaches when that domino is tipped right, and when tipped left.
// ================================================

pub mod config;
pub mod domino;
pub mod engine;
pub mod error;
pub mod parse;
pub mod report;
pub mod store;

#[cfg(feature = "python")]
pub mod py;

pub use config::EngineConfig;
pub use domino::{Direction, Domino, MAX_HEIGHT, MAX_POSITION};
pub use engine::{CascadeDistances, CascadeEngine, CascadeOutcome, CascadeStats, PassStats};
pub use error::{CascadeError, MalformedInputError, ValidationError};
pub use parse::{parse_line, LineParser};
pub use store::{DominoLine, DominoStore};

use serde::{Deserialize, Serialize};

// -------------------------------------------------
// Request / response
// -------------------------------------------------
/// One domino as supplied by a caller; validated on conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: i64,
    pub height: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CascadeRequest {
    pub length: usize,            // N
    pub dominoes: Vec<Placement>, // sparse; unlisted positions are empty
    #[serde(default)]
    pub config: EngineConfig,
}

impl CascadeRequest {
    fn into_line(self) -> Result<(DominoLine, EngineConfig), CascadeError> {
        if self.length > self.config.max_line_length {
            return Err(ValidationError::LineTooLong {
                length: self.length,
                max: self.config.max_line_length,
            }
            .into());
        }
        let mut line = DominoLine::new(self.length);
        for p in self.dominoes {
            line.place(Domino::new(p.position, p.height)?)?;
        }
        Ok((line, self.config))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CascadeResponse {
    pub right: Vec<u64>,
    pub left: Vec<u64>,
    pub stats: CascadeStats,
}

// -------------------------------------------------
// Public entry points
// -------------------------------------------------
/// Validate the request and compute both cascade passes.
#[tracing::instrument(level = "debug", skip_all, fields(length = request.length))]
pub fn cascade(request: CascadeRequest) -> Result<CascadeResponse, CascadeError> {
    let (line, config) = request.into_line()?;
    let outcome = CascadeEngine::new(config).run(&line);
    Ok(CascadeResponse {
        right: outcome.distances.right,
        left: outcome.distances.left,
        stats: outcome.stats,
    })
}

/// Two-line text in, two-line report out.
pub fn run_text(input: &str, config: &EngineConfig) -> Result<String, CascadeError> {
    let line = LineParser::new(config).parse_str(input)?;
    let outcome = CascadeEngine::new(*config).run(&line);
    Ok(report::render(&outcome.distances))
}
