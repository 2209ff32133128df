// src/puzzle/session.rs

use super::adjacency::AdjacencyGraph;
use super::completion;
use super::config::{Difficulty, PuzzleConfig, ShapeStrategy};
use super::error::{PuzzleError, PuzzleResult};
use super::generator::ShapeGenerator;
use super::groups::{GroupId, GroupStore};
use super::placement::{self, Placement};
use super::shard::ShardSet;
use super::snap::{SnapEngine, SnapOutcome};
use crate::math::{error::MathError, probability::SeedResource, types::Point2D};
use bevy::log::{debug, info};
use std::time::Duration;

/// Kurzzeitige Markierung eines gerade eingerasteten Teils.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapHighlight {
    pub shard: usize,
    /// Gruppe, in die eingerastet wurde (nur bei Dreieckspuzzles).
    pub group: Option<GroupId>,
    pub remaining: Duration,
}

/// Gesamter Zustand eines laufenden Puzzles.
///
/// Teile, Nachbarschaft, Gruppen und Lage werden immer gemeinsam erzeugt
/// und ersetzt. Eine neue Generierung baut zuerst einen vollständigen
/// Zustand und tauscht ihn dann aus.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    config: PuzzleConfig,
    engine: SnapEngine,
    difficulty: Difficulty,
    image_size: Point2D,
    shard_set: ShardSet,
    adjacency: AdjacencyGraph,
    groups: GroupStore,
    placement: Placement,
    placed: Vec<bool>,
    completed: bool,
    highlight: Option<SnapHighlight>,
}

impl PuzzleSession {
    /// Erzeugt und verteilt ein neues Puzzle.
    pub fn new(
        config: PuzzleConfig,
        width: f32,
        height: f32,
        difficulty: Difficulty,
        strategy: ShapeStrategy,
        seed_resource: &mut SeedResource,
    ) -> PuzzleResult<Self> {
        let generator = ShapeGenerator::new(config)?;
        let shard_set = generator.generate(width, height, difficulty, strategy, seed_resource)?;
        let placement = placement::scatter_all(&shard_set, generator.config(), seed_resource);

        let mut session =
            Self::from_parts(generator.config().clone(), shard_set, placement)?;
        session.difficulty = difficulty;
        session.image_size = Point2D::new(width, height);
        info!(
            "PuzzleSession: new {} / {} puzzle with {} pieces (seed {})",
            strategy.label(),
            difficulty.label(),
            session.shard_set.len(),
            seed_resource.seed
        );
        Ok(session)
    }

    /// Baut eine Sitzung aus fertigen Teilen und einer Lage, z.B. für
    /// gespeicherte oder handgebaute Layouts.
    pub fn from_parts(
        config: PuzzleConfig,
        shard_set: ShardSet,
        placement: Placement,
    ) -> PuzzleResult<Self> {
        config.validate()?;
        if placement.len() != shard_set.len() {
            return Err(PuzzleError::Math(MathError::InvalidConfiguration {
                message: format!(
                    "Placement covers {} shards, shard set has {}",
                    placement.len(),
                    shard_set.len()
                ),
            }));
        }
        let adjacency = AdjacencyGraph::build(&shard_set);
        let groups = GroupStore::new(shard_set.len());
        let bounds = shard_set.bounds();
        Ok(Self {
            engine: SnapEngine::from_config(&config),
            config,
            difficulty: Difficulty::default(),
            image_size: if bounds.is_empty() { Point2D::ZERO } else { bounds.size() },
            placed: vec![false; shard_set.len()],
            shard_set,
            adjacency,
            groups,
            placement,
            completed: false,
            highlight: None,
        })
    }

    /// Ersetzt das Puzzle vollständig. Schlägt die Generierung fehl, bleibt
    /// der alte Zustand unverändert.
    pub fn regenerate(
        &mut self,
        width: f32,
        height: f32,
        difficulty: Difficulty,
        strategy: ShapeStrategy,
        seed_resource: &mut SeedResource,
    ) -> PuzzleResult<()> {
        let fresh = Self::new(
            self.config.clone(),
            width,
            height,
            difficulty,
            strategy,
            seed_resource,
        )?;
        *self = fresh;
        Ok(())
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn strategy(&self) -> ShapeStrategy {
        self.shard_set.strategy()
    }

    pub fn image_size(&self) -> Point2D {
        self.image_size
    }

    pub fn shard_set(&self) -> &ShardSet {
        &self.shard_set
    }

    pub fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    pub fn groups(&self) -> &GroupStore {
        &self.groups
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn placed(&self) -> &[bool] {
        &self.placed
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn highlight(&self) -> Option<&SnapHighlight> {
        self.highlight.as_ref()
    }

    pub fn group_of(&self, shard: usize) -> PuzzleResult<GroupId> {
        self.groups.group_of(shard)
    }

    /// Gruppe unter einem Weltpunkt (oberstes Teil), falls es ziehbar ist.
    pub fn grab_at(&self, point: Point2D) -> Option<GroupId> {
        let shard = self.placement.shard_at(&self.shard_set, point)?;
        if self.placed.get(shard).copied().unwrap_or(false) {
            return None;
        }
        self.groups.group_of(shard).ok()
    }

    /// Verschiebt eine Gruppe während des Ziehens, ohne zu snappen.
    pub fn drag(&mut self, group: GroupId, delta: Point2D) -> PuzzleResult<()> {
        let members = self.movable_members(group)?;
        self.placement.translate_members(&members, delta)
    }

    /// Letzte Verschiebung beim Loslassen, danach ein Snap-Versuch.
    pub fn release(&mut self, group: GroupId, delta: Point2D) -> PuzzleResult<SnapOutcome> {
        let members = self.movable_members(group)?;
        self.placement.translate_members(&members, delta)?;

        let outcome = match self.strategy() {
            ShapeStrategy::Triangulated => self.engine.attempt_snap(
                group,
                &mut self.placement,
                &self.shard_set,
                &self.adjacency,
                &mut self.groups,
            )?,
            ShapeStrategy::Grid => {
                let mut outcome = SnapOutcome::NoSnap;
                for &index in &members {
                    outcome = self.engine.snap_piece(
                        index,
                        &mut self.placement,
                        &self.shard_set,
                        &mut self.placed,
                    )?;
                }
                outcome
            }
        };

        if let Some(shard) = outcome.snapped_shard() {
            let group = match outcome {
                SnapOutcome::Merged { target_group, .. } => Some(target_group),
                _ => None,
            };
            self.highlight = Some(SnapHighlight {
                shard,
                group,
                remaining: self.config.snap_highlight_duration(),
            });
            self.refresh_completion();
        }
        Ok(outcome)
    }

    /// Verteilt lose Teile neu. Verbundene Gruppen und platzierte Teile
    /// bleiben liegen.
    pub fn shuffle(&mut self, seed_resource: &mut SeedResource) -> PuzzleResult<()> {
        let indices: Vec<usize> = match self.strategy() {
            ShapeStrategy::Triangulated => (0..self.shard_set.len())
                .filter(|&i| {
                    self.groups
                        .group_of(i)
                        .is_ok_and(|g| self.groups.is_singleton(g))
                })
                .collect(),
            ShapeStrategy::Grid => (0..self.shard_set.len())
                .filter(|&i| !self.placed[i])
                .collect(),
        };
        placement::rescatter(
            &mut self.placement,
            &self.shard_set,
            &indices,
            &self.config,
            seed_resource,
        )?;
        self.refresh_completion();
        debug!("PuzzleSession::shuffle: {} pieces re-scattered", indices.len());
        Ok(())
    }

    /// Alles zurück auf Anfang: neue Verteilung, Einzelgruppen, nichts platziert.
    pub fn reset(&mut self, seed_resource: &mut SeedResource) {
        self.placement = placement::scatter_all(&self.shard_set, &self.config, seed_resource);
        self.groups.reset();
        self.placed.iter_mut().for_each(|p| *p = false);
        self.completed = false;
        self.highlight = None;
        debug!("PuzzleSession::reset: {} pieces", self.shard_set.len());
    }

    /// Lässt die Snap-Markierung nach ihrer Anzeigedauer verschwinden.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(highlight) = self.highlight.as_mut() {
            highlight.remaining = highlight.remaining.saturating_sub(delta);
            if highlight.remaining.is_zero() {
                self.highlight = None;
            }
        }
    }

    fn movable_members(&self, group: GroupId) -> PuzzleResult<Vec<usize>> {
        let members = self.groups.members(group)?;
        if let Some(&index) = members.iter().find(|&&i| self.placed[i]) {
            return Err(PuzzleError::PiecePlaced { index });
        }
        Ok(members)
    }

    fn refresh_completion(&mut self) {
        let was_completed = self.completed;
        self.completed = match self.strategy() {
            ShapeStrategy::Triangulated => {
                completion::is_complete(&self.groups, self.shard_set.len())
            }
            ShapeStrategy::Grid => completion::all_placed(&self.placed),
        };
        if self.completed && !was_completed {
            info!(
                "PuzzleSession: puzzle completed ({} pieces)",
                self.shard_set.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Bounds2D;
    use crate::puzzle::shard::Shard;

    fn two_triangle_session(offset_a: Point2D) -> PuzzleSession {
        let set = ShardSet::new(
            ShapeStrategy::Triangulated,
            Bounds2D::from_size(200.0, 200.0),
            vec![
                Shard::triangle(
                    Point2D::new(0.0, 0.0),
                    Point2D::new(200.0, 0.0),
                    Point2D::new(200.0, 200.0),
                ),
                Shard::triangle(
                    Point2D::new(0.0, 0.0),
                    Point2D::new(200.0, 200.0),
                    Point2D::new(0.0, 200.0),
                ),
            ],
            None,
        );
        let placement = Placement::from_offsets(vec![offset_a, Point2D::ZERO]);
        PuzzleSession::from_parts(PuzzleConfig::default(), set, placement).unwrap()
    }

    #[test]
    fn test_release_near_neighbor_completes_and_highlights() {
        let mut session = two_triangle_session(Point2D::new(400.0, 300.0));
        session.drag(GroupId(0), Point2D::new(-200.0, -150.0)).unwrap();
        assert!(!session.is_complete());

        let outcome = session
            .release(GroupId(0), Point2D::new(-170.0, -130.0))
            .unwrap();
        assert!(outcome.is_snapped());
        assert!(session.is_complete());
        assert_eq!(session.placement().offset(0).unwrap(), Point2D::ZERO);

        let highlight = *session.highlight().unwrap();
        assert_eq!(highlight.shard, 0);
        assert_eq!(highlight.group, Some(GroupId(1)));

        session.tick(Duration::from_millis(200));
        assert!(session.highlight().is_some());
        session.tick(Duration::from_millis(100));
        assert!(session.highlight().is_none());
    }

    #[test]
    fn test_release_far_away_keeps_raw_drop() {
        let mut session = two_triangle_session(Point2D::new(400.0, 300.0));
        let outcome = session.release(GroupId(0), Point2D::new(10.0, 0.0)).unwrap();
        assert_eq!(outcome, SnapOutcome::NoSnap);
        assert_eq!(
            session.placement().offset(0).unwrap(),
            Point2D::new(410.0, 300.0)
        );
        assert!(session.highlight().is_none());
        assert!(!session.is_complete());
    }

    #[test]
    fn test_unknown_group_does_not_move_anything() {
        let mut session = two_triangle_session(Point2D::new(30.0, 20.0));
        session.release(GroupId(0), Point2D::ZERO).unwrap();
        let before = session.placement().clone();
        assert_eq!(
            session.drag(GroupId(0), Point2D::ONE),
            Err(PuzzleError::UnknownGroup { group: GroupId(0) })
        );
        assert_eq!(session.placement(), &before);
    }

    #[test]
    fn test_shuffle_keeps_merged_groups() {
        let mut session = two_triangle_session(Point2D::new(30.0, 20.0));
        session.release(GroupId(0), Point2D::ZERO).unwrap();
        let before = session.placement().clone();
        session.shuffle(&mut SeedResource::from_seed(1)).unwrap();
        assert_eq!(session.placement(), &before);
        assert!(session.is_complete());
    }

    #[test]
    fn test_reset_restores_singletons() {
        let mut session = two_triangle_session(Point2D::new(30.0, 20.0));
        session.release(GroupId(0), Point2D::ZERO).unwrap();
        session.reset(&mut SeedResource::from_seed(5));
        assert!(!session.is_complete());
        assert_eq!(session.groups().group_count(), 2);
        assert!(session.highlight().is_none());
    }

    #[test]
    fn test_mismatched_placement_is_rejected() {
        let set = ShardSet::empty(ShapeStrategy::Triangulated);
        let result =
            PuzzleSession::from_parts(PuzzleConfig::default(), set, Placement::identity(2));
        assert!(matches!(result, Err(PuzzleError::Math(_))));
    }

    #[test]
    fn test_grid_solve_piece_by_piece() {
        let mut seed = SeedResource::from_seed(21);
        let mut session = PuzzleSession::new(
            PuzzleConfig::default(),
            640.0,
            480.0,
            Difficulty::Easy,
            ShapeStrategy::Grid,
            &mut seed,
        )
        .unwrap();
        let origin = session.shard_set().board().unwrap().origin;
        let count = session.shard_set().len();
        assert_eq!(count, 9);

        for i in 0..count {
            assert!(!session.is_complete());
            let delta = origin - session.placement().offset(i).unwrap();
            let outcome = session.release(GroupId(i), delta).unwrap();
            assert!(matches!(outcome, SnapOutcome::Placed { shard, .. } if shard == i));
        }
        assert!(session.is_complete());
        assert_eq!(
            session.release(GroupId(0), Point2D::ONE),
            Err(PuzzleError::PiecePlaced { index: 0 })
        );
    }

    #[test]
    fn test_grid_shuffle_leaves_placed_pieces() {
        let mut seed = SeedResource::from_seed(3);
        let mut session = PuzzleSession::new(
            PuzzleConfig::default(),
            800.0,
            800.0,
            Difficulty::Medium,
            ShapeStrategy::Grid,
            &mut seed,
        )
        .unwrap();
        let origin = session.shard_set().board().unwrap().origin;
        let delta = origin - session.placement().offset(6).unwrap();
        session.release(GroupId(6), delta).unwrap();

        session.shuffle(&mut seed).unwrap();
        assert_eq!(session.placement().offset(6).unwrap(), origin);
        assert!(session.placed()[6]);
        assert!(session.grab_at(origin + session.shard_set().get(6).unwrap().bounds().center()).is_none());
    }

    #[test]
    fn test_regenerate_replaces_everything() {
        let mut seed = SeedResource::from_seed(9);
        let mut session = PuzzleSession::new(
            PuzzleConfig::default(),
            600.0,
            400.0,
            Difficulty::Easy,
            ShapeStrategy::Triangulated,
            &mut seed,
        )
        .unwrap();
        session
            .regenerate(600.0, 400.0, Difficulty::Hard, ShapeStrategy::Grid, &mut seed)
            .unwrap();
        assert_eq!(session.strategy(), ShapeStrategy::Grid);
        assert_eq!(session.shard_set().len(), 25);
        assert_eq!(session.placement().len(), 25);
        assert_eq!(session.groups().len(), 25);
        assert_eq!(session.placed().len(), 25);
    }

    #[test]
    fn test_degenerate_image_gives_inert_session() {
        let mut seed = SeedResource::from_seed(0);
        let mut session = PuzzleSession::new(
            PuzzleConfig::default(),
            0.0,
            300.0,
            Difficulty::Easy,
            ShapeStrategy::Triangulated,
            &mut seed,
        )
        .unwrap();
        assert!(session.shard_set().is_empty());
        assert!(!session.is_complete());
        session.shuffle(&mut seed).unwrap();
        session.reset(&mut seed);
        assert!(session.release(GroupId(0), Point2D::ONE).is_err());
    }
}
