use super::{Position, Rect, Size};

#[test]
fn new_rect_clamps_negative_dimensions() {
	let rect = Rect::new(5.0, 5.0, -3.0, 10.0);
	assert_eq!(rect.width, 0.0);
	assert_eq!(rect.height, 10.0);
	assert!(rect.is_empty());
}

#[test]
fn rect_edges_are_exclusive() {
	let rect = Rect::new(10.0, 5.0, 3.0, 2.0);
	assert_eq!(rect.left(), 10.0);
	assert_eq!(rect.right(), 13.0);
	assert_eq!(rect.top(), 5.0);
	assert_eq!(rect.bottom(), 7.0);
}

#[test]
fn contains_uses_inclusive_origin_exclusive_max() {
	let rect = Rect::new(10.0, 5.0, 3.0, 2.0);
	assert!(rect.contains(Position::new(5.0, 10.0)));
	assert!(rect.contains(Position::new(6.5, 12.5)));
	assert!(!rect.contains(Position::new(6.0, 13.0)));
	assert!(!rect.contains(Position::new(7.0, 12.0)));
}

#[test]
fn inset_shrinks_both_axes() {
	let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
	let inner = viewport.inset(10.0);
	assert_eq!(inner, Rect::new(10.0, 10.0, 780.0, 580.0));
	assert_eq!(Rect::new(0.0, 0.0, 15.0, 15.0).inset(10.0).size(), Size::ZERO);
}

#[test]
fn centers_split_dimensions() {
	let rect = Rect::new(100.0, 100.0, 50.0, 20.0);
	assert_eq!(rect.center_x(), 125.0);
	assert_eq!(rect.center_y(), 110.0);
}
