//! Session context object.
//!
//! A [`Session`] is built once: it grows the board, classifies it, and then
//! only hands out shared references to it. Everything that changes afterwards
//! lives in the participants.
use std::collections::BTreeMap;
use std::path::Path;

use game_content::ContentFactory;
use game_core::{
    AssignmentSummary, Board, BuildReport, CardinalDirection, Color, DefaultRoomSettings,
    DungeonBuilder, EventAssigner, ExplorationState, ExplorationTracker, GameConfig, GameRng,
    MoveError, MovementValidator, Position, ResourceMeter, RoomSettingsOracle, Turn,
    quotas_from_settings,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::participant::{Participant, ParticipantId};

pub struct Session {
    config: GameConfig,
    board: Board,
    seed: u64,
    build_report: BuildReport,
    assignment: AssignmentSummary,
    participants: BTreeMap<ParticipantId, Participant>,
    next_id: u32,
    show_full_map: bool,
    settings: Box<dyn RoomSettingsOracle>,
}

impl Session {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the board was generated from. Replaying it reproduces the board.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn build_report(&self) -> BuildReport {
        self.build_report
    }

    pub fn assignment(&self) -> &AssignmentSummary {
        &self.assignment
    }

    pub fn show_full_map(&self) -> bool {
        self.show_full_map
    }

    pub fn set_show_full_map(&mut self, show: bool) {
        tracing::debug!("Full map override {}", if show { "on" } else { "off" });
        self.show_full_map = show;
    }

    /// Adds a participant on the start cell with a full energy meter.
    pub fn add_participant(&mut self, name: impl Into<String>) -> ParticipantId {
        let id = ParticipantId(self.next_id);
        self.next_id += 1;

        let mut exploration = ExplorationState::for_board(&self.board);
        let start = ExplorationTracker::new(&self.board, &mut exploration).place_at_start();
        let energy = ResourceMeter::full(self.config.starting_energy);

        let participant = Participant::new(id, name.into(), exploration, energy);
        tracing::info!(
            "Participant {} ({}) placed at {}",
            id,
            participant.name(),
            start
        );
        self.participants.insert(id, participant);
        id
    }

    pub fn participant(&self, id: ParticipantId) -> Result<&Participant> {
        self.participants
            .get(&id)
            .ok_or(RuntimeError::UnknownParticipant(id))
    }

    /// Participants in the order they joined.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.participants.values()
    }

    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.keys().copied().collect()
    }

    /// Rotates a participant a quarter turn and returns the new facing.
    pub fn turn(&mut self, id: ParticipantId, turn: Turn) -> Result<CardinalDirection> {
        let participant = self
            .participants
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownParticipant(id))?;
        let validator = MovementValidator::new(&self.board, self.config.movement_cost);
        Ok(validator.turn(&mut participant.exploration, turn))
    }

    /// Moves a participant one cell along `direction`.
    ///
    /// `Ok(false)` means the move was refused and nothing changed.
    pub fn move_participant(
        &mut self,
        id: ParticipantId,
        direction: CardinalDirection,
    ) -> Result<bool> {
        let participant = self
            .participants
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownParticipant(id))?;
        let validator = MovementValidator::new(&self.board, self.config.movement_cost);

        match validator.try_move(&mut participant.exploration, &mut participant.energy, direction) {
            Ok(destination) => {
                tracing::debug!(
                    "Participant {} moved {} to {} (energy {}/{})",
                    id,
                    direction,
                    destination,
                    participant.energy.current,
                    participant.energy.maximum
                );
                Ok(true)
            }
            Err(err) => {
                log_refused(id, &err);
                Ok(false)
            }
        }
    }

    /// Moves a participant one cell in the direction it faces.
    pub fn advance(&mut self, id: ParticipantId) -> Result<bool> {
        let facing = self.participant(id)?.facing();
        self.move_participant(id, facing)
    }

    /// Whether `position` may be drawn for this participant.
    pub fn is_visible(&self, id: ParticipantId, position: Position) -> Result<bool> {
        let participant = self.participant(id)?;
        Ok(participant
            .exploration
            .is_visible(position, self.show_full_map))
    }

    /// Display color of the room at `position`.
    pub fn color(&self, position: Position) -> Color {
        self.settings.color(self.board.room_type(position))
    }
}

fn log_refused(id: ParticipantId, err: &MoveError) {
    use game_core::GameError;

    tracing::debug!(
        "Participant {} move refused [{}]: {}",
        id,
        err.error_code(),
        err
    );
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    config: GameConfig,
    seed: Option<u64>,
    show_full_map: bool,
    settings: Box<dyn RoomSettingsOracle>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            show_full_map: false,
            settings: Box::new(DefaultRoomSettings),
        }
    }

    /// Override game configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the generation seed. A random seed is drawn otherwise.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn show_full_map(mut self, show: bool) -> Self {
        self.show_full_map = show;
        self
    }

    /// Set the room settings source used for quotas and colors.
    pub fn settings(mut self, settings: impl RoomSettingsOracle + 'static) -> Self {
        self.settings = Box::new(settings);
        self
    }

    /// Loads `config.toml` and `rooms.toml` from `data_dir`, falling back to
    /// defaults for anything missing or malformed.
    pub fn from_content(self, data_dir: impl AsRef<Path>) -> Self {
        let (config, rooms) = ContentFactory::new(data_dir.as_ref()).load_or_default();
        self.config(config).settings(rooms)
    }

    /// Applies everything [`RuntimeConfig`] selects except the participant count.
    pub fn runtime_config(self, runtime: &RuntimeConfig) -> Self {
        let mut builder = self
            .from_content(&runtime.data_dir)
            .show_full_map(runtime.show_full_map);
        if let Some(seed) = runtime.seed {
            builder = builder.seed(seed);
        }
        builder
    }

    /// Build the session: generate, classify, and log the outcome.
    pub fn build(self) -> Result<Session> {
        validate(&self.config)?;

        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();

        let config = self.config;
        let outcome = DungeonBuilder::new(
            config.board_width,
            config.board_height,
            config.target_room_count,
        )
        .run(&mut rng);
        let mut board = outcome.board;
        let build_report = outcome.report;

        if build_report.is_under_target() {
            tracing::warn!(
                "Generated {} of {} requested rooms (cap {}, frontier {})",
                build_report.placed,
                build_report.target,
                build_report.cap,
                if build_report.starved() { "exhausted" } else { "live" }
            );
        } else {
            tracing::info!(
                "Generated {}x{} board with {} rooms (seed {})",
                board.width(),
                board.height(),
                build_report.placed,
                seed
            );
        }

        let available = EventAssigner::available(&board);
        let quotas = quotas_from_settings(self.settings.as_ref(), available);
        let assignment =
            EventAssigner::new(config.enemy_percent).assign(&mut board, &mut rng, &quotas);

        for (room_type, count) in assignment.iter() {
            tracing::debug!("Assigned {} {} room(s)", count, room_type);
        }
        tracing::info!(
            "Classified {} rooms ({} special)",
            available,
            assignment.special_total()
        );

        Ok(Session {
            config,
            board,
            seed,
            build_report,
            assignment,
            participants: BTreeMap::new(),
            next_id: 0,
            show_full_map: self.show_full_map,
            settings: self.settings,
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(config: &GameConfig) -> Result<()> {
    if config.board_width == 0 || config.board_height == 0 {
        return Err(RuntimeError::InvalidConfig {
            reason: "board dimensions must be positive",
        });
    }
    if config.target_room_count == 0 {
        return Err(RuntimeError::InvalidConfig {
            reason: "target room count must be positive",
        });
    }
    if config.enemy_percent > 100 {
        return Err(RuntimeError::InvalidConfig {
            reason: "enemy percent must be at most 100",
        });
    }
    Ok(())
}
