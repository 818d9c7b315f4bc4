use crate::{ParseSliceError, SliceArgs, SliceError, SliceIndices, Strategy, parse_bound};

fn indices(start: isize, stop: isize, step: isize) -> SliceIndices {
    SliceIndices { start, stop, step }
}

#[test]
fn normalize_defaults_follow_step_sign() {
    let forward = SliceArgs::default().normalize().unwrap();
    assert_eq!(forward.start(), 0);
    assert_eq!(forward.stop(), None);
    assert_eq!(forward.step(), 1);

    let backward = SliceArgs::new(None, None, Some(-2)).normalize().unwrap();
    assert_eq!(backward.start(), -1);
    assert_eq!(backward.stop(), None);
    assert_eq!(backward.step(), -2);
}

#[test]
fn normalize_rejects_zero_step() {
    let args = SliceArgs::new(Some(0), Some(3), Some(0));
    assert_eq!(args.normalize(), Err(SliceError::ZeroStep));
    assert_eq!(args.indices(10), Err(SliceError::ZeroStep));
}

#[test]
fn strategy_follows_signs() {
    let strategy = |start, stop, step| {
        SliceArgs::new(start, stop, step)
            .normalize()
            .unwrap()
            .strategy()
    };

    assert_eq!(strategy(Some(-1), None, None), Strategy::NegativeIndex);
    assert_eq!(strategy(Some(0), Some(-1), None), Strategy::NegativeIndex);
    assert_eq!(strategy(None, None, Some(-1)), Strategy::NegativeIndex);
    assert_eq!(strategy(Some(5), Some(-1), Some(-1)), Strategy::NegativeIndex);
    assert_eq!(strategy(Some(5), None, Some(-1)), Strategy::NegativeStep);
    assert_eq!(strategy(Some(5), Some(1), Some(-3)), Strategy::NegativeStep);
    assert_eq!(strategy(None, None, None), Strategy::Forward);
    assert_eq!(strategy(Some(6), Some(4), Some(2)), Strategy::Forward);

    assert!(Strategy::NegativeIndex.is_buffered());
    assert!(Strategy::NegativeStep.is_buffered());
    assert!(!Strategy::Forward.is_buffered());
}

#[test]
fn indices_match_python() {
    let cases = [
        // (args, len, python `slice(...).indices(len)`)
        (SliceArgs::default(), 10, indices(0, 10, 1)),
        (SliceArgs::new(None, None, Some(-1)), 10, indices(9, -1, -1)),
        (SliceArgs::range(Some(-3), None), 10, indices(7, 10, 1)),
        (SliceArgs::range(Some(-15), Some(15)), 10, indices(0, 10, 1)),
        (SliceArgs::new(Some(15), Some(-15), Some(-1)), 10, indices(9, -1, -1)),
        (SliceArgs::new(Some(5), Some(0), Some(-1)), 10, indices(5, 0, -1)),
        (SliceArgs::new(Some(-4), Some(-6), Some(1)), 10, indices(6, 4, 1)),
        (SliceArgs::new(None, None, Some(-1)), 0, indices(-1, -1, -1)),
        (SliceArgs::range(Some(4), Some(9)), 0, indices(0, 0, 1)),
    ];

    for (args, len, expected) in cases {
        assert_eq!(args.indices(len).unwrap(), expected, "slice={args} len={len}");
    }
}

#[test]
fn indices_len_and_membership() {
    let window = indices(9, -1, -3);
    assert_eq!(window.len(), 4);
    let selected: Vec<usize> = (0..10).filter(|&i| window.contains(i)).collect();
    assert_eq!(selected, [0, 3, 6, 9]);

    let window = indices(1, 8, 3);
    assert_eq!(window.len(), 3);
    let selected: Vec<usize> = (0..10).filter(|&i| window.contains(i)).collect();
    assert_eq!(selected, [1, 4, 7]);

    assert!(indices(6, 4, 1).is_empty());
    assert!(indices(4, 6, -1).is_empty());
    assert!(!indices(4, 6, -1).contains(5));
}

#[test]
fn from_parts_follows_arity() {
    assert_eq!(SliceArgs::from_parts(&[Some(5)]), Ok(SliceArgs::stop(Some(5))));
    assert_eq!(
        SliceArgs::from_parts(&[Some(1), None]),
        Ok(SliceArgs::range(Some(1), None))
    );
    assert_eq!(
        SliceArgs::from_parts(&[None, Some(2), Some(-1)]),
        Ok(SliceArgs::new(None, Some(2), Some(-1)))
    );
    assert_eq!(
        SliceArgs::from_parts(&[]),
        Err(ParseSliceError::Arity { found: 0 })
    );
    assert_eq!(
        SliceArgs::from_parts(&[None; 4]),
        Err(ParseSliceError::Arity { found: 4 })
    );
}

#[test]
fn tuples_follow_arity() {
    assert_eq!(SliceArgs::from((Some(3),)), SliceArgs::stop(Some(3)));
    assert_eq!(
        SliceArgs::from((Some(1), Some(3))),
        SliceArgs::range(Some(1), Some(3))
    );
    assert_eq!(
        SliceArgs::from((Some(1), Some(3), Some(2))),
        SliceArgs::new(Some(1), Some(3), Some(2))
    );
}

#[test]
fn parse_python_notation() {
    let parse = |s: &str| s.parse::<SliceArgs>();

    assert_eq!(parse("5"), Ok(SliceArgs::stop(Some(5))));
    assert_eq!(parse("-10:-5"), Ok(SliceArgs::range(Some(-10), Some(-5))));
    assert_eq!(parse("::-1"), Ok(SliceArgs::new(None, None, Some(-1))));
    assert_eq!(parse(":"), Ok(SliceArgs::range(None, None)));
    assert_eq!(
        parse("None:3:None"),
        Ok(SliceArgs::new(None, Some(3), None))
    );
    assert_eq!(parse(" 2 : 8 : 3 "), Ok(SliceArgs::new(Some(2), Some(8), Some(3))));
}

#[test]
fn parse_rejects_malformed_notation() {
    assert_eq!(
        "1:2:3:4".parse::<SliceArgs>(),
        Err(ParseSliceError::TooManyParts { found: 4 })
    );
    assert_eq!(
        "1:x".parse::<SliceArgs>(),
        Err(ParseSliceError::InvalidBound {
            text: "x".to_string()
        })
    );
}

#[test]
fn parse_bound_accepts_absent_spellings() {
    for text in ["", "_", "None", "none", "  "] {
        assert_eq!(parse_bound(text), Ok(None), "text={text:?}");
    }
    assert_eq!(parse_bound("-7"), Ok(Some(-7)));
}

#[test]
fn display_round_trips() {
    for text in ["0:5:1", "5:0:-1", "-10:-5", "::-1", ":5", "3:"] {
        let args: SliceArgs = text.parse().unwrap();
        assert_eq!(args.to_string(), text);
    }
    assert_eq!(SliceArgs::stop(Some(4)).to_string(), ":4");
}

#[test]
fn normalized_display() {
    let slice = SliceArgs::new(None, None, Some(-1)).normalize().unwrap();
    assert_eq!(slice.to_string(), "start=-1 stop=none step=-1");
}

#[test]
fn serde_shapes() {
    let args = SliceArgs::range(Some(-3), None);
    insta::assert_snapshot!(
        serde_json::to_string(&args).unwrap(),
        @r#"{"start":-3,"stop":null,"step":null}"#
    );
    insta::assert_snapshot!(
        serde_json::to_string(&Strategy::NegativeStep).unwrap(),
        @r#""negative-step""#
    );

    let back: SliceArgs = serde_json::from_str(r#"{"start":1,"stop":7,"step":2}"#).unwrap();
    assert_eq!(back, SliceArgs::new(Some(1), Some(7), Some(2)));
}
