//! The mansion map
//!
//! A fixed binary tree of rooms. Each room owns its two optional
//! children, and may hold one clue that can be picked up exactly once.

use super::{truncate_chars, Direction, CLUE_TEXT_MAX, ROOM_NAME_MAX};

/// Static description of a room and the rooms behind it.
///
/// Plans are compiled-in constants; [`Mansion::build`] turns them into
/// an owned tree.
#[derive(Debug, Clone, Copy)]
pub struct RoomPlan {
    pub name: &'static str,
    pub clue: Option<&'static str>,
    pub left: Option<&'static RoomPlan>,
    pub right: Option<&'static RoomPlan>,
}

impl RoomPlan {
    /// A plan with no rooms behind it
    pub const fn leaf(name: &'static str, clue: Option<&'static str>) -> Self {
        Self {
            name,
            clue,
            left: None,
            right: None,
        }
    }
}

/// A single room of the mansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with no exits. An empty clue counts as no clue.
    pub fn new(name: &str, clue: Option<&str>) -> Self {
        Self {
            name: truncate_chars(name, ROOM_NAME_MAX),
            clue: clue
                .filter(|c| !c.is_empty())
                .map(|c| truncate_chars(c, CLUE_TEXT_MAX)),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clue still lying in the room, if nobody picked it up yet
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Read-only peek at the room: its name and any clue left in it
    pub fn describe(&self) -> (&str, Option<&str>) {
        (self.name(), self.clue())
    }

    /// The room behind `direction`, or `None` when there is no path that way
    pub fn step(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    fn step_mut(&mut self, direction: Direction) -> Option<&mut Room> {
        match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    /// Pick up the clue lying here.
    ///
    /// The first call on a room with a clue hands the text over and leaves
    /// the room empty; every later call returns `None`.
    pub fn collect_clue_if_any(&mut self) -> Option<String> {
        self.clue.take()
    }

    /// A room with no exits ends the exploration
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Available exits with the name of the room behind each one
    pub fn exits(&self) -> Vec<(Direction, &str)> {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter_map(|d| self.step(d).map(|room| (d, room.name())))
            .collect()
    }

    fn count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |r| r.count())
            + self.right.as_ref().map_or(0, |r| r.count())
    }
}

/// The whole map, rooted at the entrance hall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mansion {
    root: Box<Room>,
}

impl Mansion {
    /// Build the room tree described by `plan`
    pub fn build(plan: &RoomPlan) -> Self {
        let mansion = Self {
            root: build_room(plan),
        };
        tracing::debug!(rooms = mansion.len(), root = mansion.root.name(), "mansion built");
        mansion
    }

    /// Wrap an already assembled room tree
    pub fn from_root(root: Room) -> Self {
        Self {
            root: Box::new(root),
        }
    }

    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Follow `path` from the entrance. `None` if any step has no room.
    pub fn room_at(&self, path: &[Direction]) -> Option<&Room> {
        path.iter()
            .try_fold(&*self.root, |room, &d| room.step(d))
    }

    pub fn room_at_mut(&mut self, path: &[Direction]) -> Option<&mut Room> {
        path.iter()
            .try_fold(&mut *self.root, |room, &d| room.step_mut(d))
    }

    /// Number of rooms in the map
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Always false: a mansion has at least its entrance
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Tear the map down, releasing every room after its children.
    ///
    /// Returns the room names in release order. Consumes the mansion, so
    /// the same tree can never be released twice.
    pub fn teardown(self) -> Vec<String> {
        let mut released = Vec::with_capacity(self.len());
        release_room(self.root, &mut released);
        tracing::debug!(rooms = released.len(), "mansion torn down");
        released
    }
}

fn build_room(plan: &RoomPlan) -> Box<Room> {
    let mut room = Room::new(plan.name, plan.clue);
    room.left = plan.left.map(build_room);
    room.right = plan.right.map(build_room);
    Box::new(room)
}

fn release_room(mut room: Box<Room>, released: &mut Vec<String>) {
    if let Some(left) = room.left.take() {
        release_room(left, released);
    }
    if let Some(right) = room.right.take() {
        release_room(right, released);
    }
    released.push(std::mem::take(&mut room.name));
    drop(room);
}
