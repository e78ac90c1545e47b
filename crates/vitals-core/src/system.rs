//! Food and water decay applied on player ticks.
//!
//! - Each accepted tick removes `food_removal_rate` food and
//!   `water_removal_rate` water
//! - Ticks are throttled per player to `time_between_updates_ms`
//! - A dead character is refilled to 100 on every accepted tick and does
//!   not decay
//! - Selecting a character initializes unset vitals to 100
//! - Every resulting value is pushed to the client HUD, changed or not
//!
//! Relative adjustments are clamped to `[0, 100]`. Exact adjustments set the
//! magnitude of the delta as-is.

use std::sync::Arc;

use tracing::{debug, trace};
use vitals_types::{PlayerId, VITAL_MAX, VITAL_MIN, VitalName};

use crate::clock::{Clock, SystemClock};
use crate::config::VitalsConfig;
use crate::error::VitalsError;
use crate::events::{EventBus, PlayerSession};
use crate::store::CharacterStore;
use crate::sync::MetaEmitter;

/// How [`VitalsSystem::adjust_vital`] interprets its delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjustMode {
    /// Add the delta to the stored value (100 if unset) and clamp.
    #[default]
    Relative,
    /// Replace the stored value with the delta's absolute value, unclamped.
    Exact,
}

/// Result of handling one player tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PingOutcome {
    /// The tick arrived before the player's throttle window elapsed.
    Throttled,
    /// The character is dead; both vitals were refilled to 100.
    Revived,
    /// Both vitals decayed to the given values.
    Decayed {
        /// Food after decay.
        food: f64,
        /// Water after decay.
        water: f64,
    },
}

/// Result of a single vital adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalUpdate {
    /// The adjusted vital.
    pub vital: VitalName,
    /// The value pushed to the HUD.
    pub value: f64,
    /// Whether the store was written (false when the value was unchanged).
    pub written: bool,
}

/// Clamp a vital value to `[0, 100]`.
///
/// NaN passes through unchanged; [`VitalsSystem::adjust_vital`] rejects NaN
/// deltas before they get here.
pub fn normalize_vital(value: f64) -> f64 {
    value.clamp(VITAL_MIN, VITAL_MAX)
}

/// Read a delta the way a script would hand it over as text.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"3abc"` reads as 3. Returns `None` when no number starts the input.
pub fn parse_delta(input: &str) -> Option<f64> {
    #[derive(Clone, Copy)]
    enum Part {
        Start,
        Sign,
        Int,
        Dot,
        Frac,
        Exp,
        ExpSign,
        ExpDigits,
    }

    let s = input.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut part = Part::Start;
    let mut seen_digit = false;
    let mut end = None;
    for (idx, ch) in s.char_indices() {
        part = match (part, ch) {
            (Part::Start, '+' | '-') => Part::Sign,
            (Part::Start | Part::Sign | Part::Int, '0'..='9') => Part::Int,
            (Part::Start | Part::Sign | Part::Int, '.') => Part::Dot,
            (Part::Dot | Part::Frac, '0'..='9') => Part::Frac,
            (Part::Int | Part::Dot | Part::Frac, 'e' | 'E') if seen_digit => Part::Exp,
            (Part::Exp, '+' | '-') => Part::ExpSign,
            (Part::Exp | Part::ExpSign | Part::ExpDigits, '0'..='9') => Part::ExpDigits,
            _ => break,
        };
        if ch.is_ascii_digit() {
            seen_digit = true;
        }
        if seen_digit && matches!(part, Part::Int | Part::Dot | Part::Frac | Part::ExpDigits) {
            end = Some(idx.saturating_add(1));
        }
    }

    s.get(..end?)?.parse::<f64>().ok()
}

#[allow(clippy::float_cmp)]
fn differs(stored: Option<f64>, value: f64) -> bool {
    stored.is_none_or(|old| old != value)
}

/// Decays, refills, and syncs character vitals.
///
/// Cheap to clone: the store, emitter, clock, and config are shared.
pub struct VitalsSystem<S, E, C = SystemClock> {
    store: Arc<S>,
    emitter: Arc<E>,
    clock: Arc<C>,
    config: Arc<VitalsConfig>,
}

impl<S, E, C> Clone for VitalsSystem<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            emitter: Arc::clone(&self.emitter),
            clock: Arc::clone(&self.clock),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S, E, C> VitalsSystem<S, E, C>
where
    S: CharacterStore + 'static,
    E: MetaEmitter + 'static,
    C: Clock + 'static,
{
    /// Create a system over the given host collaborators.
    pub fn new(store: Arc<S>, emitter: Arc<E>, clock: Arc<C>, config: VitalsConfig) -> Self {
        Self {
            store,
            emitter,
            clock,
            config: Arc::new(config),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &VitalsConfig {
        &self.config
    }

    /// Subscribe to player ticks and character selection on `bus`.
    ///
    /// Skipped operations are logged at debug level and otherwise ignored.
    /// Calling this twice subscribes twice.
    pub fn init<B: EventBus + ?Sized>(&self, bus: &mut B) {
        let system = self.clone();
        bus.on_player_tick(Box::new(move |session: &mut PlayerSession| {
            match system.handle_ping(session) {
                Ok(PingOutcome::Throttled) => {
                    trace!(player = %session.id(), "Vitals tick throttled");
                }
                Ok(_) => {}
                Err(e) => debug!(player = %session.id(), reason = %e, "Vitals tick skipped"),
            }
        }));

        let system = self.clone();
        bus.on_character_selected(Box::new(move |session: &mut PlayerSession| {
            for vital in VitalName::ALL {
                if let Err(e) = system.force_update_vital(session.id(), vital) {
                    debug!(player = %session.id(), vital = %vital, reason = %e, "Vital sync skipped");
                }
            }
        }));
    }

    /// Handle one tick for a player.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidPlayer`] for an invalidated session and
    /// [`VitalsError::CharacterNotFound`] when no character is selected.
    /// Neither path touches the throttle.
    pub fn handle_ping(&self, session: &mut PlayerSession) -> Result<PingOutcome, VitalsError> {
        let player = session.id();
        if !session.is_valid() {
            return Err(VitalsError::InvalidPlayer(player));
        }
        let record = self
            .store
            .get(player)
            .ok_or(VitalsError::CharacterNotFound(player))?;

        let now = self.clock.now_ms();
        if !session
            .throttle
            .try_acquire(now, self.config.time_between_updates_ms)
        {
            return Ok(PingOutcome::Throttled);
        }

        if record.is_dead {
            for vital in VitalName::ALL {
                if differs(record.vital(vital), VITAL_MAX) {
                    self.store.set(player, vital, VITAL_MAX);
                }
                self.emitter.emit(player, vital, VITAL_MAX);
            }
            debug!(player = %player, "Dead character refilled");
            return Ok(PingOutcome::Revived);
        }

        let food = self.adjust_vital(
            player,
            VitalName::Food,
            -self.config.food_removal_rate,
            AdjustMode::Relative,
        )?;
        let water = self.adjust_vital(
            player,
            VitalName::Water,
            -self.config.water_removal_rate,
            AdjustMode::Relative,
        )?;
        trace!(player = %player, food = food.value, water = water.value, "Vitals decayed");

        Ok(PingOutcome::Decayed {
            food: food.value,
            water: water.value,
        })
    }

    /// Push a vital to the HUD, first filling it to 100 if it is unset or
    /// zero.
    ///
    /// Returns the value pushed.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::CharacterNotFound`] when no character is
    /// selected.
    pub fn force_update_vital(&self, player: PlayerId, vital: VitalName) -> Result<f64, VitalsError> {
        let record = self
            .store
            .get(player)
            .ok_or(VitalsError::CharacterNotFound(player))?;

        let value = match record.vital(vital) {
            Some(v) if v != 0.0 && !v.is_nan() => v,
            _ => {
                self.store.set(player, vital, VITAL_MAX);
                VITAL_MAX
            }
        };

        self.emitter.emit(player, vital, value);
        Ok(value)
    }

    /// Adjust a vital and push the result to the HUD.
    ///
    /// In [`AdjustMode::Relative`] the delta is added to the stored value
    /// (100 if unset) and the sum clamped to `[0, 100]`. In
    /// [`AdjustMode::Exact`] the value becomes `|delta|` with no clamping.
    /// The store is only written when the value changes; the HUD push
    /// always happens.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidDelta`] for a NaN delta (nothing is
    /// written or pushed), or [`VitalsError::CharacterNotFound`] when no
    /// character is selected.
    pub fn adjust_vital(
        &self,
        player: PlayerId,
        vital: VitalName,
        delta: f64,
        mode: AdjustMode,
    ) -> Result<VitalUpdate, VitalsError> {
        if delta.is_nan() {
            return Err(VitalsError::InvalidDelta {
                input: delta.to_string(),
            });
        }

        let record = self
            .store
            .get(player)
            .ok_or(VitalsError::CharacterNotFound(player))?;

        let stored = record.vital(vital);
        // TODO: confirm whether exact values should be clamped like relative ones.
        let value = match mode {
            AdjustMode::Relative => normalize_vital(stored.unwrap_or(VITAL_MAX) + delta),
            AdjustMode::Exact => delta.abs(),
        };

        let written = differs(stored, value);
        if written {
            self.store.set(player, vital, value);
        }
        self.emitter.emit(player, vital, value);

        Ok(VitalUpdate {
            vital,
            value,
            written,
        })
    }

    /// [`Self::adjust_vital`] with a delta given as text.
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::InvalidDelta`] when the text has no numeric
    /// prefix (nothing is written or pushed), or
    /// [`VitalsError::CharacterNotFound`] when no character is selected.
    pub fn adjust_vital_str(
        &self,
        player: PlayerId,
        vital: VitalName,
        delta: &str,
        mode: AdjustMode,
    ) -> Result<VitalUpdate, VitalsError> {
        let delta = parse_delta(delta).ok_or_else(|| VitalsError::InvalidDelta {
            input: delta.to_owned(),
        })?;
        self.adjust_vital(player, vital, delta, mode)
    }

    /// Current food and water as the HUD shows them (unset reads as 100).
    ///
    /// # Errors
    ///
    /// Returns [`VitalsError::CharacterNotFound`] when no character is
    /// selected.
    pub fn vitals(&self, player: PlayerId) -> Result<(f64, f64), VitalsError> {
        let record = self
            .store
            .get(player)
            .ok_or(VitalsError::CharacterNotFound(player))?;
        Ok((
            record.food.unwrap_or(VITAL_MAX),
            record.water.unwrap_or(VITAL_MAX),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use vitals_types::CharacterRecord;

    use super::*;
    use crate::clock::ManualClock;
    use crate::store::InMemoryCharacterStore;
    use crate::sync::RecordingEmitter;

    type TestSystem = VitalsSystem<InMemoryCharacterStore, RecordingEmitter, ManualClock>;

    struct Fixture {
        system: TestSystem,
        store: Arc<InMemoryCharacterStore>,
        emitter: Arc<RecordingEmitter>,
        clock: Arc<ManualClock>,
        session: PlayerSession,
    }

    impl Fixture {
        fn player(&self) -> PlayerId {
            self.session.id()
        }

        fn record(&self) -> CharacterRecord {
            self.store.get(self.player()).unwrap_or_default()
        }
    }

    fn test_config() -> VitalsConfig {
        VitalsConfig {
            time_between_updates_ms: 1_000,
            food_removal_rate: 5.0,
            water_removal_rate: 5.0,
        }
    }

    fn fixture(record: Option<CharacterRecord>) -> Fixture {
        let store = Arc::new(InMemoryCharacterStore::new());
        let emitter = Arc::new(RecordingEmitter::new());
        let clock = Arc::new(ManualClock::new(10_000));
        let session = PlayerSession::new(PlayerId::new());
        if let Some(record) = record {
            store.insert(session.id(), record);
        }
        let system = VitalsSystem::new(
            Arc::clone(&store),
            Arc::clone(&emitter),
            Arc::clone(&clock),
            test_config(),
        );
        Fixture {
            system,
            store,
            emitter,
            clock,
            session,
        }
    }

    #[test]
    fn normalize_clamps_both_ends() {
        assert_eq!(normalize_vital(-3.0), 0.0);
        assert_eq!(normalize_vital(103.0), 100.0);
        assert_eq!(normalize_vital(42.5), 42.5);
        assert!(normalize_vital(f64::NAN).is_nan());
    }

    #[test]
    fn relative_decay_from_fifty() {
        let f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        let update = f
            .system
            .adjust_vital(f.player(), VitalName::Food, -5.0, AdjustMode::Relative);
        assert_eq!(update.map(|u| u.value), Ok(45.0));
        assert_eq!(f.record().food, Some(45.0));
    }

    #[test]
    fn relative_decay_clamps_at_zero() {
        let f = fixture(Some(CharacterRecord::with_vitals(3.0, 50.0)));
        let update = f
            .system
            .adjust_vital(f.player(), VitalName::Food, -5.0, AdjustMode::Relative);
        assert_eq!(update.map(|u| u.value), Ok(0.0));
        assert_eq!(f.record().food, Some(0.0));
    }

    #[test]
    fn relative_gain_clamps_at_hundred() {
        let f = fixture(Some(CharacterRecord::with_vitals(98.0, 50.0)));
        let update = f
            .system
            .adjust_vital(f.player(), VitalName::Food, 5.0, AdjustMode::Relative);
        assert_eq!(update.map(|u| u.value), Ok(100.0));
    }

    #[test]
    fn relative_results_always_in_range() {
        let f = fixture(Some(CharacterRecord::default()));
        let starts = [0.0, 1.0, 37.5, 99.0, 100.0];
        let deltas = [-250.0, -100.0, -5.0, -0.5, 0.0, 0.5, 5.0, 100.0, 250.0];
        for start in starts {
            for delta in deltas {
                f.store.set(f.player(), VitalName::Water, start);
                let value = f
                    .system
                    .adjust_vital(f.player(), VitalName::Water, delta, AdjustMode::Relative)
                    .map(|u| u.value)
                    .unwrap_or(f64::NAN);
                assert!(
                    (0.0..=100.0).contains(&value),
                    "start {start} + delta {delta} gave {value}"
                );
            }
        }
    }

    #[test]
    fn nan_delta_is_rejected() {
        let f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        for mode in [AdjustMode::Relative, AdjustMode::Exact] {
            let result = f
                .system
                .adjust_vital(f.player(), VitalName::Food, f64::NAN, mode);
            assert_eq!(
                result,
                Err(VitalsError::InvalidDelta {
                    input: String::from("NaN")
                })
            );
        }
        assert_eq!(f.record().food, Some(50.0));
        assert!(f.emitter.is_empty());
        assert_eq!(f.store.writes(), 0);
    }

    #[test]
    fn nan_string_delta_is_rejected() {
        let f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        let result = f
            .system
            .adjust_vital_str(f.player(), VitalName::Water, "NaN", AdjustMode::Relative);
        assert!(matches!(result, Err(VitalsError::InvalidDelta { .. })));
        assert_eq!(f.record().water, Some(50.0));
        assert!(f.emitter.is_empty());
    }

    #[test]
    fn relative_mode_treats_unset_as_full() {
        let f = fixture(Some(CharacterRecord::default()));
        let update = f
            .system
            .adjust_vital(f.player(), VitalName::Water, -10.0, AdjustMode::Relative);
        assert_eq!(update.map(|u| u.value), Ok(90.0));
    }

    #[test]
    fn exact_mode_uses_absolute_value() {
        let f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        let update = f
            .system
            .adjust_vital(f.player(), VitalName::Food, -7.0, AdjustMode::Exact);
        assert_eq!(update.map(|u| u.value), Ok(7.0));
        assert_eq!(f.record().food, Some(7.0));
    }

    #[test]
    fn exact_mode_is_not_clamped() {
        let f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        let update = f
            .system
            .adjust_vital(f.player(), VitalName::Food, 150.0, AdjustMode::Exact);
        assert_eq!(update.map(|u| u.value), Ok(150.0));
        assert_eq!(f.record().food, Some(150.0));
    }

    #[test]
    fn unchanged_value_skips_write_but_still_pushes() {
        let f = fixture(Some(CharacterRecord::with_vitals(100.0, 100.0)));
        let update = f
            .system
            .adjust_vital(f.player(), VitalName::Food, 5.0, AdjustMode::Relative);

        assert_eq!(update.map(|u| u.written), Ok(false));
        assert_eq!(f.store.writes(), 0);
        assert_eq!(f.emitter.len(), 1);
        assert_eq!(f.emitter.last_value(f.player(), VitalName::Food), Some(100.0));
    }

    #[test]
    fn unset_value_is_always_written() {
        let f = fixture(Some(CharacterRecord::default()));
        let update = f
            .system
            .adjust_vital(f.player(), VitalName::Food, 0.0, AdjustMode::Relative);
        assert_eq!(update.map(|u| u.written), Ok(true));
        assert_eq!(f.record().food, Some(100.0));
    }

    #[test]
    fn adjust_without_record_is_an_error_and_silent() {
        let f = fixture(None);
        let result = f
            .system
            .adjust_vital(f.player(), VitalName::Food, -5.0, AdjustMode::Relative);
        assert_eq!(result, Err(VitalsError::CharacterNotFound(f.player())));
        assert!(f.emitter.is_empty());
        assert_eq!(f.store.writes(), 0);
    }

    #[test]
    fn string_delta_is_parsed() {
        let f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        let update = f
            .system
            .adjust_vital_str(f.player(), VitalName::Water, " -12.5 ", AdjustMode::Relative);
        assert_eq!(update.map(|u| u.value), Ok(37.5));
    }

    #[test]
    fn non_numeric_string_delta_is_rejected() {
        let f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        let result = f
            .system
            .adjust_vital_str(f.player(), VitalName::Water, "lots", AdjustMode::Relative);
        assert_eq!(
            result,
            Err(VitalsError::InvalidDelta {
                input: String::from("lots")
            })
        );
        assert!(f.emitter.is_empty());
    }

    #[test]
    fn parse_delta_reads_numeric_prefix() {
        assert_eq!(parse_delta("-5"), Some(-5.0));
        assert_eq!(parse_delta("+2.5"), Some(2.5));
        assert_eq!(parse_delta("  3abc"), Some(3.0));
        assert_eq!(parse_delta(".5"), Some(0.5));
        assert_eq!(parse_delta("7."), Some(7.0));
        assert_eq!(parse_delta("1e2x"), Some(100.0));
        assert_eq!(parse_delta("4e"), Some(4.0));
        assert_eq!(parse_delta("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_delta("abc"), None);
        assert_eq!(parse_delta("-"), None);
        assert_eq!(parse_delta("."), None);
        assert_eq!(parse_delta(""), None);
    }

    #[test]
    fn force_update_initializes_unset_vital() {
        let f = fixture(Some(CharacterRecord::default()));
        let value = f.system.force_update_vital(f.player(), VitalName::Food);
        assert_eq!(value, Ok(100.0));
        assert_eq!(f.record().food, Some(100.0));
        assert_eq!(f.emitter.last_value(f.player(), VitalName::Food), Some(100.0));
    }

    #[test]
    fn force_update_treats_zero_as_unset() {
        let f = fixture(Some(CharacterRecord::with_vitals(0.0, 20.0)));
        let value = f.system.force_update_vital(f.player(), VitalName::Food);
        assert_eq!(value, Ok(100.0));
        assert_eq!(f.record().food, Some(100.0));
    }

    #[test]
    fn force_update_pushes_existing_value_unchanged() {
        let f = fixture(Some(CharacterRecord::with_vitals(42.0, 20.0)));
        let value = f.system.force_update_vital(f.player(), VitalName::Food);
        assert_eq!(value, Ok(42.0));
        assert_eq!(f.store.writes(), 0);
        assert_eq!(f.emitter.last_value(f.player(), VitalName::Food), Some(42.0));
    }

    #[test]
    fn force_update_without_record_is_an_error() {
        let f = fixture(None);
        let result = f.system.force_update_vital(f.player(), VitalName::Water);
        assert_eq!(result, Err(VitalsError::CharacterNotFound(f.player())));
        assert!(f.emitter.is_empty());
    }

    #[test]
    fn ping_decays_both_vitals() {
        let mut f = fixture(Some(CharacterRecord::with_vitals(50.0, 30.0)));
        let outcome = f.system.handle_ping(&mut f.session);
        assert_eq!(
            outcome,
            Ok(PingOutcome::Decayed {
                food: 45.0,
                water: 25.0
            })
        );
        assert_eq!(f.record(), CharacterRecord::with_vitals(45.0, 25.0));
    }

    #[test]
    fn ping_is_throttled_inside_interval() {
        let mut f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        assert!(matches!(
            f.system.handle_ping(&mut f.session),
            Ok(PingOutcome::Decayed { .. })
        ));

        f.clock.advance(999);
        assert_eq!(f.system.handle_ping(&mut f.session), Ok(PingOutcome::Throttled));
        assert_eq!(f.record().food, Some(45.0));

        f.clock.advance(1);
        assert!(matches!(
            f.system.handle_ping(&mut f.session),
            Ok(PingOutcome::Decayed { .. })
        ));
        assert_eq!(f.record().food, Some(40.0));
    }

    #[test]
    fn dead_character_is_refilled_without_decay() {
        let mut f = fixture(Some(CharacterRecord {
            food: Some(12.0),
            water: None,
            is_dead: true,
        }));
        let outcome = f.system.handle_ping(&mut f.session);
        assert_eq!(outcome, Ok(PingOutcome::Revived));
        assert_eq!(f.record().food, Some(100.0));
        assert_eq!(f.record().water, Some(100.0));
        assert_eq!(f.emitter.last_value(f.player(), VitalName::Food), Some(100.0));
        assert_eq!(f.emitter.last_value(f.player(), VitalName::Water), Some(100.0));
        assert_eq!(f.emitter.len(), 2);
    }

    #[test]
    fn dead_character_already_full_is_not_rewritten() {
        let mut f = fixture(Some(CharacterRecord {
            food: Some(100.0),
            water: Some(100.0),
            is_dead: true,
        }));
        assert_eq!(f.system.handle_ping(&mut f.session), Ok(PingOutcome::Revived));
        assert_eq!(f.store.writes(), 0);
        assert_eq!(f.emitter.len(), 2);
    }

    #[test]
    fn invalid_session_is_skipped_without_touching_throttle() {
        let mut f = fixture(Some(CharacterRecord::with_vitals(50.0, 50.0)));
        f.session.invalidate();
        let result = f.system.handle_ping(&mut f.session);
        assert_eq!(result, Err(VitalsError::InvalidPlayer(f.player())));
        assert_eq!(f.session.throttle.next_update_at_ms(), None);
        assert!(f.emitter.is_empty());
    }

    #[test]
    fn missing_record_is_skipped_without_touching_throttle() {
        let mut f = fixture(None);
        let result = f.system.handle_ping(&mut f.session);
        assert_eq!(result, Err(VitalsError::CharacterNotFound(f.player())));
        assert_eq!(f.session.throttle.next_update_at_ms(), None);
    }

    #[test]
    fn vitals_reads_unset_as_full() {
        let f = fixture(Some(CharacterRecord {
            food: Some(20.0),
            water: None,
            is_dead: false,
        }));
        assert_eq!(f.system.vitals(f.player()), Ok((20.0, 100.0)));
        assert_eq!(f.system.config(), &test_config());
    }
}
