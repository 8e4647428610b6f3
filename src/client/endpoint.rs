//! Endpoint table of the RAIL Score API.

use reqwest::Method;

/// A remote capability and where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Calculate,
    Generate,
    Regenerate,
    AnalyzeTone,
    MatchTone,
    CheckCompliance,
    Health,
    Version,
}

impl Endpoint {
    pub const ALL: [Endpoint; 8] = [
        Endpoint::Calculate,
        Endpoint::Generate,
        Endpoint::Regenerate,
        Endpoint::AnalyzeTone,
        Endpoint::MatchTone,
        Endpoint::CheckCompliance,
        Endpoint::Health,
        Endpoint::Version,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Calculate => "/railscore/v1/score",
            Endpoint::Generate => "/railscore/v1/generate",
            Endpoint::Regenerate => "/railscore/v1/regenerate",
            Endpoint::AnalyzeTone => "/railscore/v1/tone/analyze",
            Endpoint::MatchTone => "/railscore/v1/tone/match",
            Endpoint::CheckCompliance => "/railscore/v1/compliance/check",
            Endpoint::Health => "/health",
            Endpoint::Version => "/version",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Health | Endpoint::Version => Method::GET,
            _ => Method::POST,
        }
    }

    /// Name of the client method that calls this endpoint.
    pub fn operation(&self) -> &'static str {
        match self {
            Endpoint::Calculate => "calculate",
            Endpoint::Generate => "generate",
            Endpoint::Regenerate => "regenerate",
            Endpoint::AnalyzeTone => "analyze_tone",
            Endpoint::MatchTone => "match_tone",
            Endpoint::CheckCompliance => "check_compliance",
            Endpoint::Health => "health",
            Endpoint::Version => "version",
        }
    }
}
