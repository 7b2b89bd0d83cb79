//! Chart parser: closure, shift and reduction over a deduplicated chart
//!
//! Positions are processed left to right. Within a position every state is
//! visited in insertion order, including states added while the position is
//! being processed. A complete state is reduced against the states waiting
//! at its origin unless the current token is in its rule's anti-lookahead
//! set, which is how left associativity and precedence are expressed.

use super::chart::Chart;
use super::error::{SyntaxError, SyntaxResult};
use super::state::ParseState;
use crate::config::compile_time::syntax::*;
use crate::config::runtime::SyntaxPreferences;
use crate::grammar::{matches, Grammar, Rule, Symbol, Value};
use crate::logging::codes;
use crate::tokens::Token;
use crate::{log_debug, log_error, log_success};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Counters for one parse
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseMetrics {
    pub states_created: usize,
    pub duplicates_rejected: usize,
    pub closures: usize,
    pub shifts: usize,
    pub reductions: usize,
    pub suppressed_completions: usize,
    /// Most states held by a single chart position
    pub largest_position: usize,
    pub positions_processed: usize,
    pub traced_states: usize,
}

/// What processing one state asks the parser to do
enum Step<'g> {
    Accept(Value),
    Reduce {
        left: &'g str,
        origin: usize,
        value: Value,
    },
    Suppressed {
        left: &'g str,
    },
    Predict(&'g str),
    Shift(ParseState<'g>),
    Nothing,
}

pub struct ChartParser<'g> {
    grammar: &'g Grammar,
    max_states: usize,
    timeout: Option<Duration>,
    preferences: SyntaxPreferences,
    metrics: ParseMetrics,
}

impl<'g> ChartParser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            max_states: MAX_CHART_STATES,
            timeout: None,
            preferences: SyntaxPreferences::default(),
            metrics: ParseMetrics::default(),
        }
    }

    /// Cap on states across the whole chart
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    /// Give up once `timeout` has elapsed, checked between positions
    pub fn with_deadline(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_preferences(mut self, preferences: SyntaxPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn metrics(&self) -> &ParseMetrics {
        &self.metrics
    }

    /// Parse `tokens` as nonterminal `start`. Every rule of `start` is
    /// seeded at position 0 in authored order.
    pub fn parse(&mut self, tokens: Vec<Token>, start: &str) -> SyntaxResult<Value> {
        let grammar = self.grammar;
        match grammar.rules_for(start) {
            Some(rules) if !rules.is_empty() => self.run(tokens, start, rules),
            _ => Err(self.fail(SyntaxError::unknown_nonterminal(start))),
        }
    }

    /// Parse `tokens` seeded with one specific rule. Acceptance still only
    /// looks at the left side, so any rule for the same nonterminal that
    /// spans the whole input is accepted.
    pub fn parse_from(&mut self, tokens: Vec<Token>, start_rule: &'g Rule) -> SyntaxResult<Value> {
        self.run(tokens, start_rule.left(), std::slice::from_ref(start_rule))
    }

    fn run(
        &mut self,
        mut tokens: Vec<Token>,
        start: &str,
        seeds: &'g [Rule],
    ) -> SyntaxResult<Value> {
        self.metrics = ParseMetrics::default();
        let started = Instant::now();

        log_debug!("Starting chart parse",
            "tokens" => tokens.len(),
            "start" => start,
            "seeds" => seeds.len(),
            "max_states" => self.max_states
        );

        let end_marker = Token::end_marker(tokens.last());
        tokens.push(end_marker);
        let end_index = tokens.len() - 1;

        let mut chart = Chart::new(tokens.len() + 1);
        for rule in seeds {
            self.insert(&mut chart, 0, ParseState::initial(rule, 0))?;
        }

        for position in 0..chart.size() {
            if let Some(timeout) = self.timeout {
                if started.elapsed() >= timeout {
                    return Err(self.fail(SyntaxError::DeadlineExceeded { position }));
                }
            }

            if chart.is_empty_at(position) {
                // Position 0 always holds the seeds, so position >= 1 here
                let index = position - 1;
                return Err(self.fail(SyntaxError::unexpected(&tokens[index], index)));
            }

            let lookahead = tokens.get(position);
            // Values of rules completed without consuming input at this
            // position, so late predictions of the same nonterminal advance
            let mut empty_completions: HashMap<&'g str, Value> = HashMap::new();

            let mut i = 0;
            while i < chart.len_at(position) {
                let step = match chart.get(position, i) {
                    Some(state) => {
                        self.trace(position, i, state);
                        Self::classify(state, position, end_index, start, lookahead)
                    }
                    None => Step::Nothing,
                };

                match step {
                    Step::Accept(value) => {
                        self.metrics.positions_processed = position + 1;
                        self.metrics.largest_position = chart.widest_position();
                        log_success!(
                            codes::success::PARSE_COMPLETE,
                            "Chart parse accepted input",
                            "tokens" => end_index,
                            "states" => self.metrics.states_created,
                            "duplicates" => self.metrics.duplicates_rejected
                        );
                        return Ok(value);
                    }
                    Step::Reduce {
                        left,
                        origin,
                        value,
                    } => {
                        if origin == position {
                            empty_completions
                                .entry(left)
                                .or_insert_with(|| value.clone());
                        }
                        self.reduce(&mut chart, left, origin, position, value)?;
                    }
                    Step::Suppressed { left } => {
                        self.metrics.suppressed_completions += 1;
                        if self.preferences.log_suppressed_completions {
                            log_debug!("Completion suppressed by anti-lookahead",
                                "rule" => left,
                                "position" => position,
                                "lookahead" => lookahead.map(|t| t.name.as_str()).unwrap_or("")
                            );
                        }
                    }
                    Step::Predict(name) => {
                        self.closure(&mut chart, name, position)?;
                        if let Some(value) = empty_completions.get(name) {
                            let advanced = chart.get(position, i).map(|s| s.advance(value.clone()));
                            if let Some(next) = advanced {
                                self.insert(&mut chart, position, next)?;
                            }
                        }
                    }
                    Step::Shift(next) => {
                        self.metrics.shifts += 1;
                        self.insert(&mut chart, position + 1, next)?;
                    }
                    Step::Nothing => {}
                }

                i += 1;
            }

            self.metrics.positions_processed = position + 1;
        }

        self.metrics.largest_position = chart.widest_position();
        Err(self.fail(SyntaxError::NoDerivation {
            positions: chart.size(),
        }))
    }

    fn classify(
        state: &ParseState<'g>,
        position: usize,
        end_index: usize,
        start: &str,
        lookahead: Option<&Token>,
    ) -> Step<'g> {
        if position == end_index
            && state.left() == start
            && state.is_complete()
            && state.origin() == 0
        {
            return Step::Accept(state.build_value());
        }

        match state.next_symbol() {
            None => {
                let blocked =
                    lookahead.is_some_and(|token| state.rule().anti_lookahead().blocks(token));
                if blocked {
                    Step::Suppressed { left: state.left() }
                } else {
                    Step::Reduce {
                        left: state.left(),
                        origin: state.origin(),
                        value: state.build_value(),
                    }
                }
            }
            Some(Symbol::Nonterminal(name)) => Step::Predict(name),
            Some(symbol) => match lookahead {
                Some(token) if matches(symbol, token) => {
                    Step::Shift(state.advance(token.value.clone()))
                }
                _ => Step::Nothing,
            },
        }
    }

    /// Add a fresh state for every rule of `name` at `position`
    fn closure(&mut self, chart: &mut Chart<'g>, name: &str, position: usize) -> SyntaxResult<()> {
        let grammar = self.grammar;
        let Some(rules) = grammar.rules_for(name) else {
            return Err(self.fail(SyntaxError::unknown_nonterminal(name)));
        };

        self.metrics.closures += 1;
        for rule in rules {
            self.insert(chart, position, ParseState::initial(rule, position))?;
        }
        Ok(())
    }

    /// Advance every state at `origin` waiting on `left` with `value`
    fn reduce(
        &mut self,
        chart: &mut Chart<'g>,
        left: &str,
        origin: usize,
        position: usize,
        value: Value,
    ) -> SyntaxResult<()> {
        let mut j = 0;
        while j < chart.len_at(origin) {
            let advanced = chart
                .get(origin, j)
                .filter(|state| state.awaits(left))
                .map(|state| state.advance(value.clone()));

            if let Some(next) = advanced {
                self.metrics.reductions += 1;
                self.insert(chart, position, next)?;
            }
            j += 1;
        }
        Ok(())
    }

    fn insert(
        &mut self,
        chart: &mut Chart<'g>,
        position: usize,
        state: ParseState<'g>,
    ) -> SyntaxResult<()> {
        if !chart.add(position, state) {
            self.metrics.duplicates_rejected += 1;
            return Ok(());
        }

        self.metrics.states_created += 1;
        if chart.total_states() > self.max_states {
            return Err(self.fail(SyntaxError::ChartLimitExceeded {
                states: chart.total_states(),
                limit: self.max_states,
            }));
        }
        Ok(())
    }

    fn trace(&mut self, position: usize, index: usize, state: &ParseState<'g>) {
        if !self.preferences.trace_chart || self.metrics.traced_states >= MAX_TRACE_STATES {
            return;
        }
        self.metrics.traced_states += 1;
        log_debug!("Chart state",
            "position" => position,
            "index" => index,
            "state" => state
        );
    }

    /// Log a parse failure and hand the error back
    fn fail(&self, error: SyntaxError) -> SyntaxError {
        match error.span() {
            Some(span) => log_error!(error.error_code(), "Chart parse failed",
                span = span,
                "error" => &error,
                "states" => self.metrics.states_created
            ),
            None => log_error!(error.error_code(), "Chart parse failed",
                "error" => &error,
                "states" => self.metrics.states_created
            ),
        }
        error
    }
}
