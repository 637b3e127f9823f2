use torpedo::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u128, 10>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 10, capacity: 64 })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert!(bb.is_empty());

    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert!(!bb.get(0, 0).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(10, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 10, col: 0 }
    );
    assert!(bb.get(0, 10).is_err());
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_not_stays_inside_grid() {
    let bb = BitBoard::<u128, 10>::from_cells([(0, 0), (5, 5)]).unwrap();
    let inverse = !bb;
    assert_eq!(inverse.count_ones(), 98);
    assert!(!inverse.get(5, 5).unwrap());
    assert!((inverse & bb).is_empty());
    assert_eq!((inverse | bb).count_ones(), 100);
}
