//! Command dispatcher: group bracketing and routing of commands to handlers.
//!
//! A [`Session`] owns the game and collects everything the protocol prints.
//! Any rejected command or marker terminates the session.

use log::{debug, info, warn};

use crate::ai;
use crate::command::{Command, Line};
use crate::common::{GameError, Rejection};
use crate::config::{CLASS_COUNT, MAX_BOARD_DIM, MAX_SHIPS_PER_CLASS};
use crate::game::{Game, GameStatus, TurnGroup};
use crate::geometry::Rect;
use crate::player::PlayerId;
use crate::render;
use crate::rules;
use crate::ship::{HullDamage, ShipRef};
use crate::snapshot::snapshot;

/// What the caller should do after feeding a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Serial protocol interpreter around one [`Game`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Game,
    output: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_game(Game::new())
    }

    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            output: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    /// Drain everything printed since the last call.
    pub fn take_output(&mut self) -> Vec<String> {
        core::mem::take(&mut self.output)
    }

    /// Process one raw input line.
    pub fn feed(&mut self, line: &str) -> Flow {
        if self.game.is_terminated() {
            return Flow::Stop;
        }
        let outcome = match Line::parse(line) {
            Line::Blank => Ok(()),
            Line::Marker { name, raw } => {
                debug!("marker [{}]", name);
                self.handle_marker(&name)
                    .map_err(|reason| Rejection::new(format!("{} ", raw), reason))
            }
            Line::Command(cmd) => {
                debug!("command {:?} in {:?}", cmd.echo(), self.game.open_group);
                self.handle_command(&cmd)
                    .map_err(|reason| Rejection::new(cmd.echo(), reason))
            }
        };
        if let Err(rejection) = outcome {
            warn!("{}", rejection);
            self.output.push(rejection.to_string());
            self.game.status = GameStatus::Aborted;
        }
        if self.game.is_terminated() {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }

    /// Feed lines until the session stops; returns the collected output.
    pub fn run<'a, I>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            if self.feed(line) == Flow::Stop {
                break;
            }
        }
        self.take_output()
    }

    /// End of input. Plays the automated turn when the stream ended outside
    /// any group and the player due next is automated.
    pub fn finish(&mut self, default_seed: u64) -> Vec<String> {
        let next = self.game.next_player;
        if !self.game.is_terminated()
            && self.game.open_group.is_none()
            && self.game.player(next).automated
        {
            info!("automated turn for player {}", next);
            match ai::play_turn(&self.game, default_seed) {
                Ok(lines) => self.output.extend(lines),
                Err(reason) => {
                    let echo = format!("{} ", TurnGroup::Player(next).marker());
                    let rejection = Rejection::new(echo, reason);
                    warn!("{}", rejection);
                    self.output.push(rejection.to_string());
                }
            }
            self.game.status = GameStatus::Handed;
        }
        self.take_output()
    }

    fn handle_marker(&mut self, name: &str) -> Result<(), GameError> {
        let group = TurnGroup::from_name(name).ok_or(GameError::UnknownGroup)?;
        match self.game.open_group {
            Some(open) if open == group => {
                self.game.open_group = None;
                if let TurnGroup::Player(p) = group {
                    self.end_turn(p);
                }
                Ok(())
            }
            Some(_) => Err(GameError::OtherPlayerExpected),
            None => {
                if let TurnGroup::Player(p) = group {
                    if p != self.game.next_player {
                        return Err(GameError::OtherPlayerExpected);
                    }
                    self.game.next_player = p.other();
                }
                self.game.open_group = Some(group);
                Ok(())
            }
        }
    }

    fn end_turn(&mut self, player: PlayerId) {
        self.game.player_mut(player).reset_turn();
        let receiver = self.game.next_player;
        if self.game.player(receiver).remaining_parts() == 0 && self.game.all_ships_placed() {
            let winner = receiver.other();
            info!("player {} won", winner);
            self.output.push(format!("{} won", winner));
            self.game.status = GameStatus::Won(winner);
        }
    }

    fn handle_command(&mut self, cmd: &Command) -> Result<(), GameError> {
        match self.game.open_group {
            None => {
                debug!("ignoring {:?} outside of any group", cmd.name());
                Ok(())
            }
            Some(TurnGroup::State) => self.state_command(cmd),
            Some(TurnGroup::Player(p)) => self.player_command(p, cmd),
        }
    }

    fn state_command(&mut self, cmd: &Command) -> Result<(), GameError> {
        let game = &mut self.game;
        match cmd.name() {
            "PRINT" => {
                let mode = cmd.print_mode(0)?;
                self.output.extend(render::state_view(game, mode));
            }
            "SET_FLEET" => {
                let player = cmd.player(0)?;
                let mut counts = [0usize; CLASS_COUNT];
                for (i, count) in counts.iter_mut().enumerate() {
                    *count = cmd.count(i + 1)?;
                    if *count > MAX_SHIPS_PER_CLASS {
                        return Err(GameError::InvalidArguments);
                    }
                }
                game.player_mut(player).set_fleet(counts);
            }
            "NEXT_PLAYER" => game.next_player = cmd.player(0)?,
            "BOARD_SIZE" => {
                let rows = cmd.int(0)?;
                let cols = cmd.int(1)?;
                if !(1..=MAX_BOARD_DIM).contains(&rows) || !(1..=MAX_BOARD_DIM).contains(&cols) {
                    return Err(GameError::InvalidArguments);
                }
                game.rows = rows;
                game.cols = cols;
            }
            "INIT_POSITION" => {
                let player = cmd.player(0)?;
                let start = cmd.point(1)?;
                let end = cmd.point(3)?;
                game.player_mut(player).init_area = Rect::new(start, end);
            }
            "REEF" => rules::add_reef(game, cmd.point(0)?)?,
            "SHIP" => {
                let owner = cmd.player(0)?;
                let head = cmd.point(1)?;
                let direction = cmd.direction(3)?;
                let id = cmd.count(4)?;
                let class = cmd.class(5)?;
                let damage = HullDamage::from_mask_str(cmd.arg(6)?, class.size())?;
                let this = ShipRef { owner, class, id };
                rules::restore_ship(game, this, head, direction, damage)?;
            }
            "EXTENDED_SHIPS" => game.extended = true,
            "SAVE" => self.output.extend(snapshot(game)),
            "SET_AI_PLAYER" => game.player_mut(cmd.player(0)?).automated = true,
            "SRAND" => game.seed = Some(cmd.parse_arg(0)?),
            other => debug!("ignoring unknown state command {:?}", other),
        }
        Ok(())
    }

    fn player_command(&mut self, player: PlayerId, cmd: &Command) -> Result<(), GameError> {
        let game = &mut self.game;
        match cmd.name() {
            "PLACE_SHIP" => {
                let head = cmd.point(0)?;
                let direction = cmd.direction(2)?;
                let id = cmd.count(3)?;
                let class = cmd.class(4)?;
                rules::place_ship(game, player, class, id, head, direction)?;
            }
            "SHOOT" if game.extended => {
                let id = cmd.count(0)?;
                let class = cmd.class(1)?;
                let target = cmd.point(2)?;
                let this = ShipRef {
                    owner: player,
                    class,
                    id,
                };
                if let Some(el) = rules::shoot_extended(game, this, target)? {
                    debug!("{:?} hit segment {} of {:?}", this, el.offset, el.ship);
                }
            }
            "SHOOT" => {
                let target = cmd.point(0)?;
                if let Some(el) = rules::shoot_classic(game, player, target)? {
                    debug!("player {} hit segment {} of {:?}", player, el.offset, el.ship);
                }
            }
            "MOVE" => {
                let id = cmd.count(0)?;
                let class = cmd.class(1)?;
                let kind = cmd.move_kind(2)?;
                let this = ShipRef {
                    owner: player,
                    class,
                    id,
                };
                rules::move_ship(game, this, kind)?;
            }
            "PRINT" => {
                let mode = cmd.print_mode(0)?;
                self.output.extend(render::player_view(game, player, mode));
            }
            "SPY" => {
                let id = cmd.count(0)?;
                let target = cmd.point(1)?;
                rules::launch_spy_plane(game, player, id, target)?;
            }
            "SRAND" => game.seed = Some(cmd.parse_arg(0)?),
            other => debug!("ignoring unknown command {:?} for player {}", other, player),
        }
        Ok(())
    }
}
