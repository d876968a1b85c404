//! Key-level geometry scenarios: bordering, merging and label anchors.

use keyoverlay::{Boundary, InputCode, KeyDefinition, MergeError, MouseButton, Point, Rect};

fn square(id: u32, x: i32, y: i32) -> KeyDefinition {
    let boundary = Boundary::rectangle(x, y, 10, 10).expect("square is simple");
    KeyDefinition::keyboard(id, format!("K{id}"), boundary, 100 + id)
}

#[test]
fn identical_squares_border_and_merge_in_place() {
    let a = square(1, 0, 0);
    let b = square(2, 0, 0);
    assert!(a.borders_with(&b));
    let merged = a.union_with(&[b]).expect("identical keys merge");
    assert_eq!(merged.bounding_box(), a.bounding_box());
    assert_eq!(merged.boundary, a.boundary);
}

#[test]
fn disjoint_squares_do_not_merge() {
    let a = square(1, 0, 0);
    let b = square(2, 100, 100);
    assert!(!a.borders_with(&b));
    assert!(!b.borders_with(&a));
    assert_eq!(
        a.union_with(&[b]),
        Err(MergeError::Disconnected { regions: 2 })
    );
}

#[test]
fn edge_sharing_squares_merge_into_rectangle() {
    let a = square(1, 0, 0);
    let b = square(2, 10, 0);
    assert!(a.borders_with(&b));
    let merged = a.union_with(&[b]).expect("adjacent keys merge");
    assert_eq!(merged.bounding_box(), Rect::new(0, 0, 20, 10));
    assert_eq!(
        merged.boundary.points(),
        &[
            Point::new(0, 0),
            Point::new(20, 0),
            Point::new(20, 10),
            Point::new(0, 10)
        ]
    );
}

#[test]
fn contained_square_borders() {
    let outer = KeyDefinition::keyboard(1, "Space", Boundary::rectangle(0, 0, 60, 20).unwrap(), 57);
    let inner = square(2, 20, 5);
    assert!(outer.borders_with(&inner));
    assert!(inner.borders_with(&outer));
    let merged = inner.union_with(&[outer.clone()]).unwrap();
    assert_eq!(merged.id, 2);
    assert_eq!(merged.boundary, outer.boundary);
}

#[test]
fn corner_touch_is_not_bordering() {
    let a = square(1, 0, 0);
    let b = square(2, 10, 10);
    assert!(!a.borders_with(&b));
    assert!(a.union_with(&[b]).is_err());
}

#[test]
fn union_with_empty_is_identity() {
    let mut k = KeyDefinition::mouse(
        3,
        "LMB",
        Boundary::new(vec![Point::new(0, 0), Point::new(7, 1), Point::new(3, 9)]).unwrap(),
        MouseButton::Left,
    );
    k.text_position = Some(Point::new(3, 3));
    let same = k.union_with(&[]).unwrap();
    assert_eq!(same.id, k.id);
    assert_eq!(same.input_code(), InputCode::Mouse(MouseButton::Left));
    assert_eq!(same.text, k.text);
    assert_eq!(same.boundary.points(), k.boundary.points());
    assert_eq!(same, k);
}

#[test]
fn anchor_of_symmetric_rectangle_is_centre() {
    let k = KeyDefinition::keyboard(1, "Q", Boundary::rectangle(10, 20, 40, 30).unwrap(), 16);
    assert_eq!(k.anchor(), Point::new(30, 35));
    assert_eq!(k.anchor(), k.anchor());
    assert_eq!(k.text_position(), Point::new(30, 35));
}

#[test]
fn anchor_truncates_for_odd_extents() {
    let k = KeyDefinition::keyboard(1, "W", Boundary::rectangle(0, 0, 11, 7).unwrap(), 17);
    assert_eq!(k.anchor(), Point::new(5, 3));
}

#[test]
fn iso_enter_from_two_keys() {
    // upper wide part and lower narrow part of an ISO enter key
    let upper = KeyDefinition::keyboard(1, "Enter", Boundary::rectangle(0, 0, 30, 20).unwrap(), 28);
    let lower = KeyDefinition::keyboard(2, "", Boundary::rectangle(8, 20, 22, 20).unwrap(), 28);
    let enter = upper.union_with(&[lower]).unwrap();
    assert_eq!(
        enter.boundary.points(),
        &[
            Point::new(0, 0),
            Point::new(30, 0),
            Point::new(30, 40),
            Point::new(8, 40),
            Point::new(8, 20),
            Point::new(0, 20)
        ]
    );
    assert_eq!(enter.anchor(), Point::new(15, 20));
    assert!(enter.contains(Point::new(20, 30)));
    assert!(!enter.contains(Point::new(4, 30)));
}

#[test]
fn merging_a_row_in_any_order() {
    let keys: Vec<KeyDefinition> = (0..6).map(|i| square(i, i as i32 * 10, 0)).collect();
    let mut shuffled = keys[1..].to_vec();
    shuffled.reverse();
    let merged = keys[0].union_with(&shuffled).unwrap();
    assert_eq!(merged.boundary.len(), 4);
    assert_eq!(merged.bounding_box(), Rect::new(0, 0, 60, 10));
}

#[test]
fn ring_of_keys_cannot_merge() {
    let top = square(1, 0, 0).with_boundary(Boundary::rectangle(0, 0, 30, 10).unwrap());
    let others = [
        square(2, 0, 10),
        square(3, 20, 10),
        square(4, 0, 20).with_boundary(Boundary::rectangle(0, 20, 30, 10).unwrap()),
    ];
    assert_eq!(
        top.union_with(&others),
        Err(MergeError::Disconnected { regions: 2 })
    );
}
