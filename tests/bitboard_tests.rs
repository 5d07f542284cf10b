use seabattle::{BitBoard, Coordinate};

#[test]
fn test_insert_and_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    assert!(bb.insert(Coordinate::new(1, 1)));
    assert!(!bb.insert(Coordinate::new(1, 1)), "second insert is not fresh");
    assert!(bb.contains(Coordinate::new(1, 1)));
    assert!(!bb.contains(Coordinate::new(1, 2)));
    assert_eq!(bb.iter().collect::<Vec<_>>(), vec![Coordinate::new(1, 1)]);

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_cells_outside_square_are_ignored() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(!bb.insert(Coordinate::new(-1, 0)));
    assert!(!bb.insert(Coordinate::new(0, 4)));
    assert!(!bb.contains(Coordinate::new(4, 4)));
    assert!(bb.is_empty());
}

#[test]
fn test_collect_iter_and_union() {
    let a: BitBoard<u16, 4> = [Coordinate::new(3, 3), Coordinate::new(0, 1)]
        .into_iter()
        .collect();
    let b: BitBoard<u16, 4> = [Coordinate::new(2, 0)].into_iter().collect();

    let cells: Vec<_> = (a | b).iter().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 1),
            Coordinate::new(2, 0),
            Coordinate::new(3, 3)
        ]
    );
}
