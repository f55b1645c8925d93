//! Room reference data.
//!
//! Rooms are static defaults; there is no add/remove/rename path. Tasks
//! reference rooms by id without integrity checks, so every lookup here
//! returns an `Option` and display code must supply a fallback.

use serde::{Deserialize, Serialize};

/// Label shown for a task whose room id does not resolve.
pub const UNKNOWN_ROOM_LABEL: &str = "Unknown room";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Presentation color token (gradient class pair).
    pub color: String,
}

impl Room {
    fn new(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// The six built-in rooms, in display order.
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new("kitchen", "Kitchen", "🍳", "from-orange-400 to-red-500"),
        Room::new("bathroom", "Bathroom", "🚿", "from-blue-400 to-cyan-500"),
        Room::new("living-room", "Living room", "🛋️", "from-purple-400 to-pink-500"),
        Room::new("bedroom", "Bedroom", "🛏️", "from-indigo-400 to-blue-500"),
        Room::new("laundry", "Laundry", "🧺", "from-teal-400 to-green-500"),
        Room::new("general", "General", "🏠", "from-gray-400 to-slate-500"),
    ]
}

/// Resolves a weak room reference.
pub fn find_room<'a>(rooms: &'a [Room], room_id: &str) -> Option<&'a Room> {
    rooms.iter().find(|room| room.id == room_id)
}

/// Returns the room display name, or `UNKNOWN_ROOM_LABEL` for dangling ids.
pub fn room_label<'a>(rooms: &'a [Room], room_id: &str) -> &'a str {
    find_room(rooms, room_id).map_or(UNKNOWN_ROOM_LABEL, |room| room.name.as_str())
}
