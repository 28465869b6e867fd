use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on random placement attempts for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Lengths of the fleet in placement order, longest first.
pub fn ship_lengths() -> [usize; NUM_SHIPS] {
    core::array::from_fn(|i| SHIPS[i].length())
}
