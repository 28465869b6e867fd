use seabattle::{Ship, ShipType, SHIPS};

#[test]
fn test_new_ship_is_intact() {
    let ship = Ship::new(ShipType::new("Test", 3));
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_sunk());
    for i in 0..3 {
        assert!(!ship.is_hit_at(i));
    }
}

#[test]
fn test_sunk_after_every_segment_hit() {
    let mut ship = Ship::new(SHIPS[0]);
    let len = ship.length();
    for i in 0..len {
        assert!(!ship.is_sunk(), "sunk too early at segment {}", i);
        ship.hit(i);
    }
    assert!(ship.is_sunk());
    // stays sunk
    ship.hit(0);
    assert!(ship.is_sunk());
}

#[test]
fn test_hit_is_idempotent() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    ship.hit(1);
    ship.hit(1);
    assert_eq!(ship.hit_count(), 1);
    assert!(ship.is_hit_at(1));
    assert!(!ship.is_sunk());
}

#[test]
fn test_out_of_range_hit_is_ignored() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    ship.hit(2);
    ship.hit(100);
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_hit_at(2));
    assert!(!ship.is_hit_at(usize::MAX));
}
