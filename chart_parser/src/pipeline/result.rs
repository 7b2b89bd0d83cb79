use crate::grammar::Value;
use crate::lexical::LexicalMetrics;
use crate::syntax::ParseMetrics;
use std::time::Duration;

/// Result value plus the metrics of both stages
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub value: Value,
    pub lexical_metrics: LexicalMetrics,
    pub parse_metrics: ParseMetrics,
    pub token_count: usize,
    pub source_bytes: usize,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        value: Value,
        lexical_metrics: LexicalMetrics,
        parse_metrics: ParseMetrics,
        source_bytes: usize,
        processing_duration: Duration,
    ) -> Self {
        Self {
            value,
            token_count: lexical_metrics.total_tokens,
            lexical_metrics,
            parse_metrics,
            source_bytes,
            processing_duration,
        }
    }

    pub fn log_success(&self, origin: &str) {
        let seconds = self.processing_duration.as_secs_f64().max(f64::EPSILON);
        crate::log_success!(
            crate::logging::codes::success::PARSE_COMPLETE,
            "Parsing pipeline succeeded",
            "source" => origin,
            "duration_ms" => format!("{:.2}", seconds * 1000.0),
            "tokens" => self.token_count,
            "chart_states" => self.parse_metrics.states_created,
            "processing_rate_tokens_per_sec" => format!("{:.0}", self.token_count as f64 / seconds)
        );
    }
}
