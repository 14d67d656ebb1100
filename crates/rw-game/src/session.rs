//! Session state machine and per-verb dispatch.

use rw_core::{ExitTarget, Room, UseEffect, World};

use crate::error::{GameError, GameResult};
use crate::parser::{Command, parse_command};
use crate::player::PlayerState;

/// Lifecycle of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Accepting commands.
    Playing,
    /// A fatal action ended the game.
    Dead {
        /// What killed the player.
        cause: String,
    },
    /// The player quit.
    Quit,
}

/// A running game: the world, the player, and the last action's status.
///
/// One call to [`Session::process`] resolves one command completely; there
/// is no partial turn. Once the phase leaves `Playing` it never returns,
/// and further input is ignored.
pub struct Session {
    world: World,
    player: PlayerState,
    status: String,
    phase: Phase,
}

impl Session {
    /// Start a session at the world's configured start room.
    pub fn new(world: World) -> Self {
        let player = PlayerState::new(world.start());
        Self {
            world,
            player,
            status: String::new(),
            phase: Phase::Playing,
        }
    }

    /// The world being explored.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> &Room {
        self.world.room(self.player.location)
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The status message of the last resolved action.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Resolve one line of input: parse, dispatch, record the status.
    ///
    /// Recoverable failures become their fixed status strings; the session
    /// keeps playing. In a terminal phase the stored status is returned
    /// unchanged and the input is ignored.
    pub fn process(&mut self, input: &str) -> &str {
        if self.phase != Phase::Playing {
            return &self.status;
        }

        let result = match parse_command(input) {
            Command::Go { direction } => self.do_go(&direction),
            Command::Look { item } => self.do_look(&item),
            Command::Take { item } => self.do_take(&item),
            Command::Use { item } => self.do_use(&item),
            Command::Quit => self.do_quit(),
            Command::Unknown => Err(GameError::InputRejected),
        };

        self.status = match result {
            Ok(status) => status,
            Err(e) => e.to_string(),
        };
        &self.status
    }

    fn do_go(&mut self, direction: &str) -> GameResult<String> {
        let target = self
            .world
            .resolve_exit(self.player.location, direction)
            .cloned()
            .ok_or(GameError::ExitNotFound)?;

        match target {
            ExitTarget::Lethal { message } => {
                self.phase = Phase::Dead {
                    cause: message.clone(),
                };
                Ok(message)
            }
            ExitTarget::Room(id) => {
                self.player.location = id;
                Ok(format!("You move to {}.", self.world.room(id).name))
            }
        }
    }

    /// `look` inspects the current room only, never the inventory, and
    /// mutates nothing.
    fn do_look(&self, item: &str) -> GameResult<String> {
        self.world
            .item_description(self.player.location, item)
            .map(str::to_string)
            .ok_or(GameError::ItemNotFound)
    }

    fn do_take(&mut self, name: &str) -> GameResult<String> {
        let item = self
            .world
            .find_item(self.player.location, name)
            .ok_or(GameError::NotGrabbable)?;
        if !item.grabbable {
            return Err(GameError::NotGrabbable);
        }

        // The fatal transition fires before inventory is ever touched.
        if let Some(cause) = item.deadly.clone() {
            self.phase = Phase::Dead {
                cause: cause.clone(),
            };
            return Ok(cause);
        }

        if self.player.has_item(name) {
            return Ok(format!("You already have the {name}."));
        }

        let taken = self
            .world
            .take_item(self.player.location, name)
            .ok_or(GameError::NotGrabbable)?;
        self.player.add_item(taken.name.clone());
        Ok(format!("{} added to inventory.", taken.name))
    }

    fn do_use(&mut self, name: &str) -> GameResult<String> {
        if !self.player.has_item(name) {
            return Err(GameError::ItemNotHeld);
        }

        let effect = self
            .world
            .use_effect(name)
            .cloned()
            .ok_or(GameError::ItemNotUsable)?;

        match effect {
            UseEffect::Eat { message } => {
                self.player.remove_item(name);
                Ok(message)
            }
            UseEffect::Unlock { room, message } => {
                if self.world.find_room(&room) == Some(self.player.location) {
                    self.player.remove_item(name);
                    Ok(message)
                } else {
                    Err(GameError::ItemNotUsableHere)
                }
            }
        }
    }

    fn do_quit(&mut self) -> GameResult<String> {
        self.phase = Phase::Quit;
        Ok("Thanks for playing!".to_string())
    }
}
