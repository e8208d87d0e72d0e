//! The duel engine.
//!
//! `DuelEngine` holds the rules (`DuelConfig`) and the opponent policy, and
//! applies every state transition of a match to a borrowed [`GameState`].
//! It owns no games and performs no I/O; randomness comes in through a
//! [`RandomSource`] on each call.
//!
//! ## Turn rules
//!
//! - Shooting the other fighter always passes the turn, unless it knocks
//!   them out.
//! - Shooting yourself with a blank keeps the turn; a live round passes it,
//!   blocked or not.
//! - The damage multiplier resets after every shot.
//!
//! Actions from the fighter not on turn fail with `WrongTurn`, and any
//! action after a knockout fails with `RoundOver`. Rejected calls leave the
//! state untouched.

use crate::ai::{Heuristic, OpponentPolicy};
use crate::core::{
    Chamber, ChamberInfo, DuelConfig, Fighter, FighterId, GamePhase, GameState, Hit, MatchResult, RandomSource,
    Region, ShotKind,
};
use crate::error::{DuelError, Result};
use crate::items::{draw_items, ItemEffect};

use super::action::{Action, AiTurn, Aim, ItemOutcome, Outcome, RoundStart, ShotOutcome, ShotReport};

const RELOAD_NOTE: &str = "Bag-o nga bala! New chamber loaded!";

/// Applies duel rules to game states.
#[derive(Clone, Debug)]
pub struct DuelEngine<P = Heuristic> {
    config: DuelConfig,
    policy: P,
}

impl DuelEngine {
    /// Engine with the default heuristic opponent. Fails if `config` does
    /// not validate.
    pub fn new(config: DuelConfig) -> Result<Self> {
        Self::with_policy(config, Heuristic::default())
    }
}

impl Default for DuelEngine {
    fn default() -> Self {
        Self {
            config: DuelConfig::default(),
            policy: Heuristic::default(),
        }
    }
}

impl<P: OpponentPolicy> DuelEngine<P> {
    /// Engine with a custom opponent policy.
    pub fn with_policy(config: DuelConfig, policy: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // === Lifecycle ===

    /// Start a match: round 1, both fighters at full health with fresh
    /// items, a fresh chamber, player to move.
    ///
    /// The opponent comes from the rival region. Draw order: player items,
    /// opponent items, chamber.
    pub fn create_game<R: RandomSource>(
        &self,
        id: impl Into<String>,
        player_name: impl Into<String>,
        region: Region,
        rng: &mut R,
    ) -> GameState {
        let rival = region.rival();
        let count = self.config.items_per_fighter;
        let health = self.config.max_health;

        let player = Fighter::new(FighterId::Player, player_name, region, health, draw_items(region, count, rng));
        let opponent = Fighter::new(
            FighterId::Opponent,
            rival.fighter_name(),
            rival,
            health,
            draw_items(rival, count, rng),
        );
        let last_action = format!("{} vs {} - Sugod!", player.name, opponent.name);

        let state = GameState {
            id: id.into(),
            player,
            opponent,
            current_turn: FighterId::Player,
            chamber: Chamber::generate(&self.config, rng),
            game_phase: GamePhase::ItemSelection,
            round: 1,
            max_rounds: self.config.max_rounds,
            last_action,
            damage_multiplier: 1,
        };
        log::debug!("[engine] created game {}: {}", state.id, state.last_action);
        state
    }

    /// Deal the next round, or finalize the match after the last one.
    ///
    /// Finalizing only sets the phase and the closing message; health,
    /// items and the chamber are left as they were.
    pub fn start_new_round<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> RoundStart {
        if state.is_final_round() {
            let result = state.standings();
            state.game_phase = GamePhase::GameOver;
            state.last_action = match result {
                MatchResult::Winner(id) => format!("{} wins the match!", state.fighter(id).name),
                MatchResult::Draw => "The match ends in a draw!".to_string(),
            };
            log::info!("[engine] game {} finished: {:?}", state.id, result);
            return RoundStart::MatchOver(result);
        }

        state.round += 1;
        for id in [FighterId::Player, FighterId::Opponent] {
            let items = draw_items(state.fighter(id).region, self.config.items_per_fighter, rng);
            state.fighter_mut(id).reset_for_round(items);
        }
        state.chamber = Chamber::generate(&self.config, rng);
        state.current_turn = FighterId::Player;
        state.game_phase = GamePhase::ItemSelection;
        state.damage_multiplier = 1;
        state.last_action = format!("Round {} - Sugod!", state.round);

        log::debug!("[engine] game {} round {}", state.id, state.round);
        RoundStart::Started(state.round)
    }

    /// Unrevealed live and blank shots left in the chamber.
    #[must_use]
    pub fn chamber_info(&self, state: &GameState) -> ChamberInfo {
        state.chamber.info()
    }

    // === Shooting ===

    /// The player shoots the opponent.
    pub fn shoot_opponent<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> Result<ShotReport> {
        self.fire(state, FighterId::Player, Aim::AtOpponent, rng)
    }

    /// The player shoots themself.
    pub fn shoot_self<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> Result<ShotReport> {
        self.fire(state, FighterId::Player, Aim::AtSelf, rng)
    }

    /// The opponent shoots the player.
    pub fn ai_shoot_opponent<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> Result<ShotReport> {
        self.fire(state, FighterId::Opponent, Aim::AtOpponent, rng)
    }

    /// The opponent shoots itself.
    pub fn ai_shoot_self<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> Result<ShotReport> {
        self.fire(state, FighterId::Opponent, Aim::AtSelf, rng)
    }

    /// Fire the next shot from `shooter`'s seat.
    pub fn fire<R: RandomSource>(
        &self,
        state: &mut GameState,
        shooter: FighterId,
        aim: Aim,
        rng: &mut R,
    ) -> Result<ShotReport> {
        self.check_actor(state, shooter)?;

        let reloaded = state.chamber.ensure_loaded(&self.config, rng);
        let Some(kind) = state.chamber.fire() else {
            return Err(DuelError::InvalidConfig("chamber holds no shots".into()));
        };

        let target = match aim {
            Aim::AtSelf => shooter,
            Aim::AtOpponent => shooter.other(),
        };
        let raw_damage = self.config.base_damage.saturating_mul(state.damage_multiplier);
        state.damage_multiplier = 1;
        state.game_phase = GamePhase::Shooting;

        let (outcome, damage) = match kind {
            ShotKind::Live => match state.fighter_mut(target).take_hit(raw_damage) {
                Hit::Blocked => (ShotOutcome::Blocked, 0),
                Hit::Damaged(dealt) => (ShotOutcome::Hit, dealt),
            },
            ShotKind::Blank => (ShotOutcome::Blank, 0),
        };

        let knockout = state.fighter(target).is_knocked_out();
        let mut message = if knockout {
            let winner = target.other();
            state.fighter_mut(winner).wins += 1;
            state.game_phase = GamePhase::GameOver;
            format!("KNOCKOUT! {} wins the round!", state.fighter(winner).name)
        } else {
            Self::describe_shot(state, shooter, target, outcome, damage)
        };

        let passes_turn = match aim {
            Aim::AtOpponent => !knockout,
            Aim::AtSelf => kind == ShotKind::Live,
        };
        if passes_turn {
            state.current_turn = shooter.other();
        }

        if reloaded {
            message = format!("{RELOAD_NOTE} {message}");
        }
        state.last_action = message;

        log::debug!(
            "[engine] {} fired {:?} at {}: {:?}, {} damage",
            shooter,
            kind,
            target,
            outcome,
            damage
        );
        if knockout {
            log::info!("[engine] game {}: {} knocked out in round {}", state.id, target, state.round);
        }

        Ok(ShotReport {
            shooter,
            target,
            kind,
            outcome,
            damage,
            knockout,
            reloaded,
        })
    }

    fn describe_shot(state: &GameState, shooter: FighterId, target: FighterId, outcome: ShotOutcome, damage: u32) -> String {
        let shooter_name = &state.fighter(shooter).name;
        let target_name = &state.fighter(target).name;
        match (outcome, shooter == target) {
            (ShotOutcome::Hit, false) => format!("HIT! {damage} damage to {target_name}!"),
            (ShotOutcome::Hit, true) => format!("SELF HIT! {damage} damage to {shooter_name}!"),
            (ShotOutcome::Blocked, _) => format!("{target_name}'s shield blocked the shot! Gisangga sa kalasag!"),
            (ShotOutcome::Blank, false) => format!("BLANK! {target_name} is safe!"),
            (ShotOutcome::Blank, true) => format!("BLANK! {shooter_name} keeps the turn! Padayon!"),
        }
    }

    // === Items ===

    /// Use an item from `actor`'s inventory.
    ///
    /// An unknown or exhausted id changes nothing and yields `NoSuchItem`.
    pub fn use_item<R: RandomSource>(
        &self,
        state: &mut GameState,
        item_id: &str,
        actor: FighterId,
        rng: &mut R,
    ) -> Result<ItemOutcome> {
        self.check_actor(state, actor)?;

        let fighter = state.fighter(actor);
        let Some(item) = fighter.items.iter().find(|i| i.id == item_id && i.is_usable()) else {
            log::debug!("[engine] {} has no usable item {:?}", actor, item_id);
            return Ok(ItemOutcome::NoSuchItem);
        };
        let effect = item.effect;
        let item_name = item.name_local.clone();
        let fighter_name = fighter.name.clone();

        let mut peeked = None;
        let message = match effect {
            ItemEffect::Heal => {
                let amount = self.config.heal_amount;
                state.fighter_mut(actor).heal(amount);
                format!("{fighter_name} used {item_name}! +{amount} health!")
            }
            ItemEffect::Shield => {
                state.fighter_mut(actor).shield = true;
                format!("{fighter_name} activated {item_name}! Protektado!")
            }
            ItemEffect::Peek => {
                let reloaded = state.chamber.ensure_loaded(&self.config, rng);
                peeked = state.chamber.peek();
                let seen = match peeked {
                    Some(ShotKind::Live) => "LIVE",
                    _ => "BLANK",
                };
                let note = if reloaded { format!("{RELOAD_NOTE} ") } else { String::new() };
                format!("{note}{fighter_name} used {item_name}! Next shot is: {seen}")
            }
            ItemEffect::DoubleDamage => {
                state.damage_multiplier = self.config.boosted_multiplier;
                format!(
                    "{fighter_name} powered up! Next shot deals {}x damage!",
                    self.config.boosted_multiplier
                )
            }
            ItemEffect::SkipTurn | ItemEffect::ReverseDamage => {
                log::warn!("[engine] {} tried reserved effect {:?}", actor, effect);
                return Ok(ItemOutcome::Unsupported(effect));
            }
        };

        let fighter = state.fighter_mut(actor);
        if let Some(item) = fighter.usable_item_mut(item_id) {
            item.uses -= 1;
        }
        fighter.discard_spent_items();
        state.last_action = message;

        log::debug!("[engine] {} used {} ({:?})", actor, item_id, effect);
        Ok(ItemOutcome::Used { effect, peeked })
    }

    // === Opponent ===

    /// Play the opponent's turn with the engine's policy.
    ///
    /// The chamber is reloaded first if spent, so the policy always sees
    /// at least one remaining shot. At most one item is used per call.
    pub fn ai_turn<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> Result<AiTurn> {
        let actor = FighterId::Opponent;
        self.check_actor(state, actor)?;

        let reloaded = state.chamber.ensure_loaded(&self.config, rng);
        let decision = self.policy.decide(state, rng);

        let mut item_note = None;
        let item = match &decision.item {
            Some(id) => {
                let outcome = self.use_item(state, id, actor, rng)?;
                if outcome.is_used() {
                    item_note = Some(state.last_action.clone());
                }
                Some(outcome)
            }
            None => None,
        };

        let mut shot = self.fire(state, actor, decision.aim, rng)?;
        if let Some(note) = item_note {
            state.last_action = format!("{note} {}", state.last_action);
        }
        if reloaded {
            shot.reloaded = true;
            state.last_action = format!("{RELOAD_NOTE} {}", state.last_action);
        }

        Ok(AiTurn { decision, item, shot })
    }

    // === Generic actions ===

    /// Actions `actor` may take now. Empty when it is not their turn or the
    /// round is over.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState, actor: FighterId) -> Vec<Action> {
        if self.check_actor(state, actor).is_err() {
            return Vec::new();
        }
        let mut actions = vec![Action::Shoot(Aim::AtOpponent), Action::Shoot(Aim::AtSelf)];
        actions.extend(
            state
                .fighter(actor)
                .items
                .iter()
                .filter(|i| i.is_usable() && i.effect.is_implemented())
                .map(|i| Action::UseItem(i.id.clone())),
        );
        actions
    }

    /// Apply an action for `actor`.
    pub fn apply<R: RandomSource>(
        &self,
        state: &mut GameState,
        actor: FighterId,
        action: &Action,
        rng: &mut R,
    ) -> Result<Outcome> {
        match action {
            Action::Shoot(aim) => self.fire(state, actor, *aim, rng).map(Outcome::Shot),
            Action::UseItem(id) => self.use_item(state, id, actor, rng).map(Outcome::Item),
        }
    }

    fn check_actor(&self, state: &GameState, actor: FighterId) -> Result<()> {
        if state.is_round_over() {
            return Err(DuelError::RoundOver);
        }
        if state.current_turn != actor {
            log::warn!("[engine] {} acted on {}'s turn", actor, state.current_turn);
            return Err(DuelError::WrongTurn {
                attempted: actor,
                current: state.current_turn,
            });
        }
        Ok(())
    }
}
