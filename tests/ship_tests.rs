use seabattle::{Coordinate, Orientation, Ship};

#[test]
fn test_horizontal_coordinates_step_columns() {
    let ship = Ship::new(Coordinate::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.occupied_coordinates().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(2, 1),
            Coordinate::new(2, 2),
            Coordinate::new(2, 3)
        ]
    );
}

#[test]
fn test_vertical_coordinates_step_rows() {
    let ship = Ship::new(Coordinate::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = ship.occupied_coordinates().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0),
            Coordinate::new(3, 0)
        ]
    );
}

#[test]
fn test_covers() {
    let ship = Ship::new(Coordinate::new(1, 1), 2, Orientation::Vertical);
    assert!(ship.covers(Coordinate::new(1, 1)));
    assert!(ship.covers(Coordinate::new(2, 1)));
    assert!(!ship.covers(Coordinate::new(3, 1)));
    assert!(!ship.covers(Coordinate::new(1, 2)));
}

#[test]
fn test_new_ship_is_afloat() {
    let ship = Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal);
    assert_eq!(ship.remaining_hits(), 2);
    assert!(!ship.is_sunk());
    assert_eq!(ship.bow(), Coordinate::new(0, 0));
    assert_eq!(ship.length(), 2);
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn test_neighbours_surround_cell() {
    let centre = Coordinate::new(3, 3);
    let around: Vec<_> = centre.neighbours().collect();
    assert_eq!(around.len(), 8);
    assert!(!around.contains(&centre));
    for c in around {
        assert!((c.row - 3).abs() <= 1 && (c.col - 3).abs() <= 1);
    }
}

#[test]
fn test_coordinates_saturate_at_grid_limit() {
    let ship = Ship::new(Coordinate::new(0, i32::MAX - 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.occupied_coordinates().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, i32::MAX - 1),
            Coordinate::new(0, i32::MAX),
            Coordinate::new(0, i32::MAX),
        ]
    );
}
