//! Classroom model.
//!
//! Rooms are interchangeable apart from capacity: any room that seats
//! the whole class is a valid host for its lessons.

use serde::{Deserialize, Serialize};

/// A physical room lessons are held in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique room identifier.
    pub id: String,
    /// Room name or number (e.g., "B-204").
    pub name: String,
    /// Seat count.
    pub capacity: u32,
}

impl Classroom {
    /// Creates a new room with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this room seats a class of the given size.
    #[inline]
    pub fn fits(&self, class_size: u32) -> bool {
        self.capacity >= class_size
    }
}
