//! The door scenario: a dude walks to a door and tries to open it.
//!
//! All state lives in [`World`]; the rule tree borrows it. The caller loop
//! re-evaluates the tree from the root once per tick.

use std::cell::Cell;

use behavior_rules::{Rule, Status, eq, execute, named, set};

use crate::config::DoorConfig;

/// Caller-owned state of the scenario.
#[derive(Debug)]
pub struct World {
    pub door_open: Cell<bool>,
    pub door_locked: Cell<bool>,
    pub failed: Cell<bool>,
    pub dude_has_key: bool,
    pub dude_position: Cell<i64>,
    pub door_position: i64,
}

impl World {
    pub fn new(config: &DoorConfig) -> Self {
        Self {
            door_open: Cell::new(false),
            door_locked: Cell::new(true),
            failed: Cell::new(false),
            dude_has_key: config.dude_has_key,
            dude_position: Cell::new(0),
            door_position: config.door_position,
        }
    }

    fn at_door(&self) -> bool {
        self.dude_position.get() == self.door_position
    }

    /// Builds the scenario's rule tree over this world.
    ///
    /// `(at_door & (unlock_door | give_up) & open_door) | move_dude`
    pub fn rules(&self) -> Rule<'_> {
        let move_dude = named("move_dude", || {
            self.dude_position.set(self.dude_position.get() + 1);
            Status::Success
        });

        let unlock_door = named("unlock_door", || {
            if !self.at_door() || !self.dude_has_key {
                return Status::Fail;
            }
            self.door_locked.set(false);
            Status::Success
        });

        let open_door = named("open_door", || {
            if !self.at_door() || self.door_locked.get() {
                return Status::Fail;
            }
            self.door_open.set(true);
            Status::Success
        });

        let try_open = eq(&self.dude_position, self.door_position)
            & (unlock_door | set(&self.failed, true))
            & open_door;

        try_open | move_dude
    }
}

/// Final state of a scenario run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub door_open: bool,
    pub failed: bool,
    pub dude_position: i64,
    pub ticks: u64,
    /// The tick limit was reached before the loop settled.
    pub exhausted: bool,
}

/// Ticks the door scenario until the door is unlocked, the dude gives up,
/// or `max_ticks` is reached.
pub fn run(config: &DoorConfig) -> Outcome {
    let world = World::new(config);
    let rules = world.rules();

    let mut ticks = 0;
    while world.door_locked.get() && !world.failed.get() && ticks < config.max_ticks {
        let status = execute(&rules);
        ticks += 1;
        tracing::debug!(
            tick = ticks,
            %status,
            position = world.dude_position.get(),
            "scenario tick"
        );
    }

    let outcome = Outcome {
        door_open: world.door_open.get(),
        failed: world.failed.get(),
        dude_position: world.dude_position.get(),
        ticks,
        exhausted: world.door_locked.get() && !world.failed.get(),
    };

    if outcome.exhausted {
        tracing::warn!(ticks, "scenario stopped at tick limit");
    }
    tracing::info!(?outcome, "scenario finished");

    outcome
}
