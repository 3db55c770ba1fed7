use super::*;

const ALL: [Ease; 6] = [
    Ease::Linear,
    Ease::OutQuad,
    Ease::OutCubic,
    Ease::OutQuart,
    Ease::InOutQuad,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutQuart.apply(-3.0), 0.0);
    assert_eq!(Ease::OutQuart.apply(7.0), 1.0);
}

#[test]
fn serde_names_are_snake_case() {
    let s = serde_json::to_string(&Ease::OutQuart).unwrap();
    assert_eq!(s, "\"out_quart\"");
    let e: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
}
