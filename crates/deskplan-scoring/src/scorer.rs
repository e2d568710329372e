//! Weighted layout scoring and ranking.

use crate::breakdown::ScoreBreakdown;
use crate::metrics::{self, SubScores};
use deskplan_core::{DoorLayout, Point, Room, Side};
use deskplan_designer::CandidateResult;
use deskplan_settings::{ConfigError, ScoringConfig, ScoringWeights};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Room facts the scores are measured against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreContext {
    pub room: Room,
    /// Door reference points; empty means a single door at the bottom centre
    #[serde(default)]
    pub door_positions: Vec<Point>,
    /// Walls with windows; `None` uses the configured default
    #[serde(default)]
    pub window_sides: Option<Vec<Side>>,
}

impl ScoreContext {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            door_positions: Vec::new(),
            window_sides: None,
        }
    }

    pub fn with_door_point(mut self, point: Point) -> Self {
        self.door_positions.push(point);
        self
    }

    /// Use the centre of a laid out door as a reference point
    pub fn with_door(self, door: &DoorLayout) -> Self {
        self.with_door_point(door.center())
    }

    pub fn with_window_sides(mut self, sides: Vec<Side>) -> Self {
        self.window_sides = Some(sides);
        self
    }

    /// Door points with the bottom-centre fallback applied
    pub fn door_points(&self) -> Vec<Point> {
        if self.door_positions.is_empty() {
            vec![Point::new(
                self.room.width as f64 / 2.0,
                self.room.depth as f64,
            )]
        } else {
            self.door_positions.clone()
        }
    }
}

impl From<Room> for ScoreContext {
    fn from(room: Room) -> Self {
        Self::new(room)
    }
}

/// One entry of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedLayout {
    /// Position of the layout in the input slice
    pub index: usize,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scores candidate layouts with an immutable weight set
#[derive(Debug, Clone)]
pub struct Scorer<'a> {
    config: &'a ScoringConfig,
    weights: ScoringWeights,
}

impl<'a> Scorer<'a> {
    /// Scorer using the base weights of `config`
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self {
            config,
            weights: config.weights,
        }
    }

    /// Scorer using a named preset merged onto the base weights
    pub fn with_preset(config: &'a ScoringConfig, preset: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            config,
            weights: config.weights_for(Some(preset))?,
        })
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn config(&self) -> &ScoringConfig {
        self.config
    }

    /// Unweighted sub-scores of a layout
    pub fn sub_scores(&self, layout: &CandidateResult, ctx: &ScoreContext) -> SubScores {
        let th = &self.config.thresholds;
        let room = &ctx.room;
        let window_sides = ctx
            .window_sides
            .as_deref()
            .unwrap_or(self.config.window_sides.as_slice());

        SubScores {
            seat_count: metrics::seat_count(layout, room, th),
            passage_width: metrics::passage_width(layout, room, th),
            natural_light: metrics::natural_light(layout, room, window_sides, th),
            traffic_flow: metrics::traffic_flow(layout, &ctx.door_points(), th),
            face_to_face_bonus: metrics::face_to_face_bonus(layout, th),
            space_efficiency: metrics::space_efficiency(layout, room, th),
            desk_spacing: metrics::desk_spacing(layout, th),
            area_per_person: metrics::area_per_person(layout, room, th),
        }
    }

    /// Total score and weighted breakdown; infeasible layouts score zero
    pub fn score(&self, layout: &CandidateResult, ctx: &ScoreContext) -> (f64, ScoreBreakdown) {
        if !layout.ok {
            return (0.0, ScoreBreakdown::default());
        }

        let breakdown = ScoreBreakdown::weighted(&self.sub_scores(layout, ctx), &self.weights);
        debug!(
            "Scored {} {} with {} seats: {:.3}",
            layout.pattern, layout.ws_type, layout.seats_placed, breakdown.total
        );
        (breakdown.total, breakdown)
    }

    /// Rank layouts by total, highest first; equal totals keep input order
    pub fn compare_layouts(
        &self,
        layouts: &[CandidateResult],
        ctx: &ScoreContext,
    ) -> Vec<RankedLayout> {
        let mut ranked: Vec<RankedLayout> = layouts
            .iter()
            .enumerate()
            .map(|(index, layout)| {
                let (score, breakdown) = self.score(layout, ctx);
                RankedLayout {
                    index,
                    score,
                    breakdown,
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Highest scoring layout, `None` for an empty slice
    pub fn best_layout<'c>(
        &self,
        layouts: &'c [CandidateResult],
        ctx: &ScoreContext,
    ) -> Option<(&'c CandidateResult, RankedLayout)> {
        let best = self.compare_layouts(layouts, ctx).into_iter().next()?;
        layouts.get(best.index).map(|layout| (layout, best))
    }
}
